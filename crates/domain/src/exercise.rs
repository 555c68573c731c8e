use std::slice::Iter;

use derive_more::{Deref, Display};
use strum::AsRefStr;
use uuid::Uuid;

use crate::{CreateError, Name, NameError, ReadError, SourceExercise, UpdateError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn find_exercise(&self, name: &Name) -> Result<Option<ExerciseID>, ReadError>;
    async fn create_exercise(&self, exercise: &Exercise) -> Result<(), CreateError>;
    async fn update_exercise(&self, id: ExerciseID, exercise: &Exercise)
    -> Result<(), UpdateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: Name,
    pub description: String,
    pub category: Category,
    pub muscle_group: MuscleGroup,
    pub equipment: Equipment,
}

impl TryFrom<&SourceExercise> for Exercise {
    type Error = NameError;

    fn try_from(value: &SourceExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: Name::new(translate_name(&value.name))?,
            description: value.description.clone(),
            category: Category::from_wger_category(value.category.id),
            muscle_group: value
                .muscles
                .first()
                .map_or(MuscleGroup::FullBody, |m| MuscleGroup::from_wger_muscle(m.id)),
            equipment: value
                .equipment
                .first()
                .map_or(Equipment::Bodyweight, |e| {
                    Equipment::from_wger_equipment(e.id)
                }),
        })
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// English exercise names with an established French name.
static TRANSLATIONS: [(&str, &str); 12] = [
    ("Bench Press", "Développé couché"),
    ("Squat", "Squat"),
    ("Deadlift", "Soulevé de terre"),
    ("Pull-up", "Traction"),
    ("Push-up", "Pompe"),
    ("Dips", "Dips"),
    ("Shoulder Press", "Développé épaules"),
    ("Bicep Curl", "Curl biceps"),
    ("Tricep Extension", "Extension triceps"),
    ("Plank", "Planche"),
    ("Crunch", "Crunch"),
    ("Lunge", "Fente"),
];

/// Returns the French name for a known exercise, or the name unchanged.
#[must_use]
pub fn translate_name(name: &str) -> &str {
    TRANSLATIONS
        .iter()
        .find(|(english, _)| *english == name)
        .map_or(name, |(_, french)| *french)
}

#[derive(AsRefStr, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Strength,
    Cardio,
    Flexibility,
    Bodyweight,
}

impl Category {
    /// Unknown categories are treated as strength exercises.
    #[must_use]
    pub fn from_wger_category(id: u32) -> Self {
        match id {
            14 => Category::Cardio,
            15 => Category::Flexibility,
            _ => Category::Strength,
        }
    }
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 4] = [
            Category::Strength,
            Category::Cardio,
            Category::Flexibility,
            Category::Bodyweight,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Flexibility => "Flexibility",
            Category::Bodyweight => "Bodyweight",
        }
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Abs,
    FullBody,
}

impl MuscleGroup {
    #[must_use]
    pub fn from_wger_muscle(id: u32) -> Self {
        match id {
            1 | 13 => MuscleGroup::Biceps,
            2 | 14 => MuscleGroup::Triceps,
            4 | 10 => MuscleGroup::Chest,
            5 | 11 => MuscleGroup::Back,
            6 | 15 => MuscleGroup::Abs,
            7 | 8 => MuscleGroup::Legs,
            9 | 12 => MuscleGroup::Shoulders,
            _ => MuscleGroup::FullBody,
        }
    }
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 8] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Abs,
            MuscleGroup::FullBody,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

#[derive(AsRefStr, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    None,
    Dumbbells,
    Barbell,
    Kettlebell,
    ResistanceBands,
    Machine,
    Bodyweight,
}

impl Equipment {
    /// Unknown equipment maps to `None`.
    #[must_use]
    pub fn from_wger_equipment(id: u32) -> Self {
        match id {
            1 => Equipment::Barbell,
            2 => Equipment::Machine,
            3 => Equipment::Dumbbells,
            4 => Equipment::Bodyweight,
            6 => Equipment::ResistanceBands,
            7 => Equipment::Kettlebell,
            _ => Equipment::None,
        }
    }
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 7] = [
            Equipment::None,
            Equipment::Dumbbells,
            Equipment::Barbell,
            Equipment::Kettlebell,
            Equipment::ResistanceBands,
            Equipment::Machine,
            Equipment::Bodyweight,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "No Equipment",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Barbell => "Barbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::Machine => "Machine",
            Equipment::Bodyweight => "Bodyweight",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
