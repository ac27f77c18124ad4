use std::fs;

use linescript::run_with_output;
use walkdir::WalkDir;

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "lsc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut out = Vec::new();
        if let Err(e) = run_with_output(&source, &mut out) {
            panic!("Demo script {:?} failed:\n{}\nError: {}", path, source, e);
        }
        assert!(!out.is_empty(), "Demo script {path:?} printed nothing");
    }

    assert!(count > 0, "No demo scripts found in demos");
}
