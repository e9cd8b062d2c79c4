use uuid::Uuid;

use crate::{GameId, PlayerId};

pub fn generate_game_id() -> GameId {
    GameId::new(Uuid::new_v4().to_string())
}

pub fn generate_player_id() -> PlayerId {
    PlayerId::new(Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_v4_uuids() {
        for _ in 0..200 {
            let id = generate_game_id();
            let uuid = Uuid::parse_str(id.as_str()).unwrap();
            assert_eq!(uuid.get_version_num(), 4);
            assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
            assert_eq!(id.as_str(), uuid.hyphenated().to_string());
        }
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let first = generate_player_id();
        let second = generate_player_id();
        assert_ne!(first, second);
    }
}
