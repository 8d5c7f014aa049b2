use crate::engine_task::{EngineReport, EngineTask, TaskError};
use log::{error, info, warn};
use std::fs;
use std::path::Path;

fn io_error(path: &Path, source: std::io::Error) -> TaskError {
    TaskError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Parses a JSON task document. On a syntax error the offending line is logged with
/// a pointer to the column.
pub fn parse_task(text: &str, path: &Path) -> Result<EngineTask, TaskError> {
    match serde_json::from_str::<EngineTask>(text) {
        Ok(task) => {
            if task.is_empty() {
                warn!("task file '{}' contains no calculations", path.display());
            }
            Ok(task)
        }
        Err(e) => {
            let (line, column) = (e.line(), e.column());
            error!(
                "error parsing task file '{}' at line {}, column {}: {}",
                path.display(),
                line,
                column,
                e
            );
            if let Some(problem_line) = text.lines().nth(line.saturating_sub(1)) {
                error!("Problematic line: {}", problem_line);
                if column >= 1 && column <= problem_line.len() + 1 {
                    error!("{}^", " ".repeat(column - 1));
                }
            }
            Err(TaskError::Parse {
                path: path.display().to_string(),
                line,
                column,
                source: e,
            })
        }
    }
}

pub fn load_task_from_file(path: &Path) -> Result<EngineTask, TaskError> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let task = parse_task(&text, path)?;
    info!("Successfully parsed task from file '{}'", path.display());
    Ok(task)
}

/// Writes the E-1 task as a starting point for a new design
pub fn write_template(path: &Path) -> Result<(), TaskError> {
    let text = serde_json::to_string_pretty(&EngineTask::e1())?;
    fs::write(path, text).map_err(|e| io_error(path, e))?;
    info!("template task written to '{}'", path.display());
    Ok(())
}

pub fn save_report_to_file(report: &EngineReport, path: &Path) -> Result<(), TaskError> {
    let text = serde_json::to_string_pretty(report)?;
    fs::write(path, text).map_err(|e| io_error(path, e))?;
    info!("report saved to '{}'", path.display());
    Ok(())
}

/// Files in `dir` whose names start with `prefix` and end with `.json`, sorted by name
pub fn find_task_files(dir: &Path, prefix: &str) -> Result<Vec<std::path::PathBuf>, TaskError> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
        let path = entry.map_err(|e| io_error(dir, e))?.path();
        let matches = path.is_file()
            && path
                .file_name()
                .map(|f| f.to_string_lossy())
                .is_some_and(|name| name.starts_with(prefix) && name.ends_with(".json"));
        if matches {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
