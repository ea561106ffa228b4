use animal_repository::animal::Animal;
use animal_repository::app::{generate_site, Outcome};
use animal_repository::error::{AnimalError, Result};
use animal_repository::fetcher::AnimalSource;
use async_trait::async_trait;
use std::fs;

/// In-memory source standing in for the HTTP client.
enum FakeSource {
    Animals(Vec<Animal>),
    NetworkDown,
}

#[async_trait]
impl AnimalSource for FakeSource {
    async fn fetch(&self, _name: &str) -> Result<Vec<Animal>> {
        match self {
            FakeSource::Animals(animals) => Ok(animals.clone()),
            FakeSource::NetworkDown => Err(AnimalError::Network("HTTP 503 Service Unavailable".into())),
        }
    }
}

#[tokio::test]
async fn test_generates_sorted_page() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("animals.html");
    let source = FakeSource::Animals(vec![
        Animal::new("Snow Leopard").with_characteristic("diet", "Carnivore"),
        Animal::new("Leopard Seal"),
        Animal::new("Leopard"),
    ]);

    let outcome = generate_site(&source, "leopard", &output).await;

    assert_eq!(outcome, Outcome::Generated { count: 3, output: output.clone() });
    assert_eq!(outcome.status_line(), "✅ Website generated with 3 animal(s).");

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches(r#"class="cards__item""#).count(), 3);
    let titles: Vec<usize> = ["Leopard<", "Leopard Seal<", "Snow Leopard<"]
        .iter()
        .map(|title| html.find(title).unwrap())
        .collect();
    assert!(titles.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_empty_result_writes_not_found_page() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("animals.html");

    let outcome = generate_site(&FakeSource::Animals(vec![]), "<script>dragon</script>", &output).await;

    assert!(matches!(outcome, Outcome::NoResults { .. }));
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("&lt;script&gt;dragon&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("cards__item\""));
}

#[tokio::test]
async fn test_fetch_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("animals.html");

    let outcome = generate_site(&FakeSource::NetworkDown, "fox", &output).await;

    assert_eq!(
        outcome.status_line(),
        "❌ Error fetching data: Network error: HTTP 503 Service Unavailable"
    );
    assert!(!output.exists());
}

#[tokio::test]
async fn test_overwrites_previous_page() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("animals.html");
    fs::write(&output, "stale").unwrap();

    generate_site(&FakeSource::Animals(vec![Animal::new("Fox")]), "fox", &output).await;

    let html = fs::read_to_string(&output).unwrap();
    assert!(!html.contains("stale"));
    assert!(html.contains("Fox"));
}

#[tokio::test]
async fn test_unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("animals.html");

    let outcome = generate_site(&FakeSource::Animals(vec![Animal::new("Fox")]), "fox", &output).await;

    assert!(matches!(outcome, Outcome::WriteFailed { .. }));
}
