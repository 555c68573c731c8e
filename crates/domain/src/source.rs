//! Exercise records as published by the WGER exercise database.

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait SourceRepository {
    async fn read_source_exercises(&self) -> Result<Vec<SourceExercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceExercise {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: SourceCategory,
    pub muscles: Vec<SourceMuscle>,
    pub equipment: Vec<SourceEquipment>,
    pub language: SourceLanguage,
}

impl SourceExercise {
    #[must_use]
    pub fn is_in_language(&self, short_name: &str) -> bool {
        self.language.short_name == short_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCategory {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMuscle {
    pub id: u32,
    pub name: String,
    pub is_front: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEquipment {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLanguage {
    pub id: u32,
    pub short_name: String,
}
