use mockito::Server;
use recipe_suggest::{Filters, OpenAiProvider, Suggester, TEMPLATES};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn suggester_against(server: &Server) -> Suggester {
    let provider = OpenAiProvider::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "gpt-3.5-turbo".to_string(),
    );
    Suggester::with_provider(Box::new(provider))
}

fn completion_body(content: &str) -> String {
    serde_json::to_string(&json!({
        "choices": [{"message": {"content": content}}]
    }))
    .unwrap()
}

#[tokio::test]
async fn test_remote_suggestions_win_when_the_call_succeeds() {
    init_logging();
    let mut server = Server::new_async().await;
    let content = serde_json::to_string(&json!([{
        "id": "whatever",
        "title": "Shrimp with Peppers Noodles",
        "description": "A delicious dish featuring shrimp, peppers.",
        "ingredients": ["shrimp", "peppers", "noodles"],
        "instructions": ["Boil the noodles.", "Cook shrimp until done."],
        "cookingTime": 20,
        "diet": [],
        "cuisine": "Asian",
        "imageUrl": "https://example.com/noodles.jpg"
    }]))
    .unwrap();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&content))
        .create_async()
        .await;

    let suggester = suggester_against(&server);
    let ingredients = vec!["shrimp".to_string(), "peppers".to_string()];
    let recipes = suggester
        .suggest(&ingredients, &Filters::any())
        .await
        .unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Shrimp with Peppers Noodles");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_failure_is_absorbed_and_local_engine_answers() {
    init_logging();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(r#"{"error": "Incorrect API key provided"}"#)
        .create_async()
        .await;

    let suggester = suggester_against(&server);
    let ingredients = vec!["chicken".to_string(), "broccoli".to_string()];
    let recipes = suggester
        .suggest(&ingredients, &Filters::any())
        .await
        .unwrap();

    // Local engine output: one customized recipe per template
    assert_eq!(recipes.len(), TEMPLATES.len());
    assert!(recipes[0].title.starts_with("Chicken with Broccoli "));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unparseable_completion_is_absorbed_too() {
    init_logging();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Here are some ideas for dinner..."))
        .create_async()
        .await;

    let suggester = suggester_against(&server);
    let recipes = suggester.suggest(&[], &Filters::any()).await.unwrap();

    assert_eq!(recipes.len(), TEMPLATES.len());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_local_fallback_still_honors_filters() {
    init_logging();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let suggester = suggester_against(&server);
    let filters = Filters {
        diet: "vegan".to_string(),
        ..Filters::any()
    };
    let recipes = suggester.suggest(&[], &filters).await.unwrap();

    assert_eq!(recipes.len(), 1);
    assert!(recipes[0].diet.iter().any(|tag| tag == "vegan"));
}
