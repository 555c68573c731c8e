use std::collections::HashSet;

use log::{error, info, warn};

use crate::{Exercise, ExerciseRepository, Name, SourceRepository, SyncError};

pub struct ImportService<S, R> {
    source: S,
    repository: R,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Short name of the language whose records are imported, e.g. `en`.
    pub language: String,
    pub dry_run: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            dry_run: false,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub fetched: usize,
    /// Records in another language.
    pub skipped: usize,
    /// Records whose name is not usable.
    pub invalid: usize,
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $name: expr) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            error!("failed to {} exercise {}: {err}", $action, $name);
        }
        result
    }};
}

impl<S, R> ImportService<S, R>
where
    S: SourceRepository,
    R: ExerciseRepository,
{
    pub fn new(source: S, repository: R) -> Self {
        Self { source, repository }
    }

    /// Fetches the source exercises and upserts them by name.
    ///
    /// Only a failure to read the source aborts the import. Failures on single exercises are
    /// logged and counted in the report.
    pub async fn import(&self, options: &ImportOptions) -> Result<ImportReport, SyncError> {
        info!("starting exercise import");

        let source_exercises = self.source.read_source_exercises().await?;
        let mut report = ImportReport {
            fetched: source_exercises.len(),
            ..ImportReport::default()
        };
        info!("{} exercises fetched from WGER", report.fetched);

        // Names a dry run would have inserted, so later duplicates count as updates.
        let mut planned = HashSet::new();

        for source_exercise in &source_exercises {
            if !source_exercise.is_in_language(&options.language) {
                report.skipped += 1;
                continue;
            }

            let exercise = match Exercise::try_from(source_exercise) {
                Ok(exercise) => exercise,
                Err(err) => {
                    warn!("skipping WGER exercise {}: {err}", source_exercise.id);
                    report.invalid += 1;
                    continue;
                }
            };

            let upsert = if options.dry_run {
                self.plan(&exercise, &mut planned).await
            } else {
                self.upsert(&exercise).await
            };

            match upsert {
                Some(Upsert::Created) => report.created += 1,
                Some(Upsert::Updated) => report.updated += 1,
                None => report.failed += 1,
            }
        }

        info!(
            "exercise import finished: {} created, {} updated, {} failed, {} skipped, {} invalid",
            report.created, report.updated, report.failed, report.skipped, report.invalid
        );

        Ok(report)
    }

    /// Returns `None` if the exercise could not be written.
    async fn upsert(&self, exercise: &Exercise) -> Option<Upsert> {
        let name = &exercise.name;
        let existing = log_on_error!(self.repository.find_exercise(name), "look up", name).ok()?;

        if let Some(id) = existing {
            log_on_error!(
                self.repository.update_exercise(id, exercise),
                "update",
                name
            )
            .ok()?;
            info!("exercise updated: {name}");
            Some(Upsert::Updated)
        } else {
            log_on_error!(self.repository.create_exercise(exercise), "create", name).ok()?;
            info!("exercise created: {name}");
            Some(Upsert::Created)
        }
    }

    async fn plan(&self, exercise: &Exercise, planned: &mut HashSet<Name>) -> Option<Upsert> {
        let name = &exercise.name;
        let existing = log_on_error!(self.repository.find_exercise(name), "look up", name).ok()?;

        if existing.is_some() || !planned.insert(name.clone()) {
            info!("exercise would be updated: {name}");
            Some(Upsert::Updated)
        } else {
            info!("exercise would be created: {name}");
            Some(Upsert::Created)
        }
    }
}

enum Upsert {
    Created,
    Updated,
}
