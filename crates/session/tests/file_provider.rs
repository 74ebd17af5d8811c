#![forbid(unsafe_code)]

use pretty_assertions::assert_eq;
use session::{Error, FileSessionProvider, LapEntry, SessionFile, SessionProvider, SessionStore};
use std::fs;
use tempfile::tempdir;

fn silverstone() -> SessionFile {
    let laps = [
        ("VER", Some(90.1)),
        ("HAM", Some(91.0)),
        ("VER", Some(90.3)),
        ("HAM", None),
        ("VER", Some(90.0)),
    ];
    SessionFile {
        season: 2023,
        event: "British Grand Prix".into(),
        session: "R".into(),
        laps: laps
            .into_iter()
            .map(|(driver, lap_time)| LapEntry {
                driver: driver.into(),
                lap_time,
            })
            .collect(),
    }
}

#[test]
fn saved_session_is_fetched_by_race_name() {
    let dir = tempdir().unwrap();
    let store = SessionStore::create(dir.path()).unwrap();
    let path = store.save(&silverstone()).unwrap();
    assert_eq!(path, dir.path().join("2023").join("british-grand-prix.json"));

    let provider = FileSessionProvider::new(store);
    let laps = provider.fetch_session(2023, "British Grand Prix").unwrap();
    assert_eq!(laps.len(), 5);
    assert_eq!(laps.drivers().len(), 2);

    // slug form resolves to the same file
    assert_eq!(
        provider.fetch_session(2023, "british-grand-prix").unwrap(),
        laps
    );
}

#[test]
fn unknown_race_is_not_found() {
    let dir = tempdir().unwrap();
    let provider = FileSessionProvider::new(SessionStore::create(dir.path()).unwrap());

    let err = provider.fetch_session(2023, "Atlantis Grand Prix").unwrap_err();
    assert!(matches!(
        err,
        Error::SessionNotFound { season: 2023, ref race } if race == "Atlantis Grand Prix"
    ));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let store = SessionStore::create(dir.path()).unwrap();
    fs::create_dir_all(dir.path().join("2023")).unwrap();
    fs::write(store.path_for(2023, "Monaco Grand Prix"), "{ not json").unwrap();

    let provider = FileSessionProvider::new(store);
    assert!(matches!(
        provider.fetch_session(2023, "Monaco Grand Prix"),
        Err(Error::Json(_))
    ));
}

#[test]
fn races_lists_season_slugs() {
    let dir = tempdir().unwrap();
    let store = SessionStore::create(dir.path()).unwrap();
    for event in ["Monaco Grand Prix", "Bahrain Grand Prix"] {
        let mut session = silverstone();
        session.event = event.into();
        store.save(&session).unwrap();
    }
    fs::write(dir.path().join("2023").join("notes.txt"), "ignored").unwrap();

    assert_eq!(
        store.races(2023).unwrap(),
        vec!["bahrain-grand-prix", "monaco-grand-prix"]
    );
    assert!(store.races(1950).unwrap().is_empty());
}
