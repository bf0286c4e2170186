// Integration tests for loading run configuration from disk
use brute_tour::{ExhaustiveSolver, SearchMode, SolverConfig, SolverError};
use std::io::Write;

#[test]
fn test_load_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{"cities": 7, "start_city": 2, "seed": 11, "mode": "bounded", "threads": 1}}"#
    )?;

    let config = SolverConfig::from_json_file(file.path())?;
    config.validate()?;

    assert_eq!(config.cities, 7);
    assert_eq!(config.start_city, Some(2));
    assert_eq!(config.mode, SearchMode::Bounded);

    let solver = ExhaustiveSolver::from_config(&config);
    assert_eq!(solver.mode, SearchMode::Bounded);
    assert_eq!(solver.threads, Some(1));
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SolverConfig::from_json_file(dir.path().join("absent.json"));

    assert!(matches!(result, Err(SolverError::Io(_))));
}

#[test]
fn test_config_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{"cities": 5, "start_city": 5}}"#)?;

    let config = SolverConfig::from_json_file(file.path())?;
    assert!(matches!(
        config.validate(),
        Err(SolverError::InvalidArgument(_))
    ));
    Ok(())
}
