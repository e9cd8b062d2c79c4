pub mod kalah;
