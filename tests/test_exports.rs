use recipe_scout::export::{self, CSV_EXPORT_FILE, JSON_EXPORT_FILE};
use recipe_scout::{JsonFileStore, LocalRecipe, RecipeStore};

fn seeded_store(dir: &tempfile::TempDir, recipes: &[LocalRecipe]) -> JsonFileStore {
    let store = JsonFileStore::new(dir.path().join("store.json"));
    if !recipes.is_empty() {
        store.save(recipes).unwrap();
    }
    store
}

fn pancakes() -> LocalRecipe {
    LocalRecipe {
        name: "Pancakes".to_string(),
        ingredients: vec!["flour".to_string(), "milk".to_string(), "eggs".to_string()],
        instructions: "Whisk and fry.".to_string(),
        image: "https://example.com/pancakes.jpg".to_string(),
    }
}

/// CSV export with zero records writes no file; with one record it writes
/// exactly the header and one fully quoted row
#[test]
fn test_csv_export_empty_then_single_record() {
    let out = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();

    let empty = seeded_store(&data, &[]);
    assert_eq!(export::export_csv(&empty, out.path()).unwrap(), None);
    assert!(!out.path().join(CSV_EXPORT_FILE).exists());

    let store = seeded_store(&data, &[pancakes()]);
    let path = export::export_csv(&store, out.path()).unwrap().unwrap();
    assert_eq!(path, out.path().join(CSV_EXPORT_FILE));

    let content = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        content,
        "name,ingredients,instructions,image\n\
         \"Pancakes\",\"flour;milk;eggs\",\"Whisk and fry.\",\"https://example.com/pancakes.jpg\""
    );
}

/// Fields containing commas and quotes stay within their cell
#[test]
fn test_csv_export_keeps_awkward_fields_in_one_cell() {
    let out = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();

    let mut recipe = pancakes();
    recipe.name = "Grandma's \"Best\" Pancakes".to_string();
    recipe.instructions = "Whisk, then fry.".to_string();
    let store = seeded_store(&data, &[recipe]);

    let path = export::export_csv(&store, out.path()).unwrap().unwrap();
    let content = std::fs::read_to_string(path).unwrap();

    let rows: Vec<&str> = content.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].starts_with("\"Grandma's \"\"Best\"\" Pancakes\","));
    assert!(rows[1].contains("\"Whisk, then fry.\""));
}

/// JSON export always writes, including the empty array for an empty store
#[test]
fn test_json_export_always_writes() {
    let out = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();

    let empty = seeded_store(&data, &[]);
    let path = export::export_json(&empty, out.path()).unwrap();
    assert_eq!(path, out.path().join(JSON_EXPORT_FILE));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");

    let store = seeded_store(&data, &[pancakes()]);
    let path = export::export_json(&store, out.path()).unwrap();
    let exported: Vec<LocalRecipe> =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(exported, vec![pancakes()]);
}

/// The export directory is created on demand
#[test]
fn test_export_creates_the_target_directory() {
    let out = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    let nested = out.path().join("exports/today");

    let store = seeded_store(&data, &[pancakes()]);
    let path = export::export_json(&store, &nested).unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}
