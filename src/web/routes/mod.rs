pub mod board;
pub mod signup;
