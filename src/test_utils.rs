use crate::models::domain::{CustomQuestion, Difficulty, Operation, Student};
