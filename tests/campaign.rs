use std::collections::HashMap;
use std::time::Duration;

use awc::Client;
use crowdfund_server::{CampaignBody, Config};

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 8080,
        database_uri: "mongodb://localhost:27017".to_string(),
        database_name: "crowdfunding-test".to_string(),
        campaign_list_limit: 10,
        campaign_list_minimum: 6,
        auth_tokens: HashMap::from([("sesame".to_string(), "tester@example.com".to_string())]),
    }
}

#[actix_rt::test]
#[ignore = "requires a running mongod on localhost:27017"]
async fn create_campaign_round_trips() {
    let _ = std::thread::spawn(|| crowdfund_server::run(test_config()));
    // give the server a moment to bind
    std::thread::sleep(Duration::from_millis(500));

    let body = serde_json::json!({
        "name": "The Green Bean Brigade",
        "titleName": "Green Beans",
        "amount": 5000,
    });
    let client = Client::default();
    let created: CampaignBody = client
        .post("http://localhost:8080/campaigns")
        .insert_header(("Authorization", "Bearer sesame"))
        .send_json(&body)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(created.creator_email.as_deref(), Some("tester@example.com"));
    assert_eq!(
        created.fields.get_str("name").unwrap(),
        "The Green Bean Brigade"
    );

    let fetched: CampaignBody = client
        .get(format!("http://localhost:8080/campaigns/{}", created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.fields, created.fields);
}

#[actix_rt::test]
#[ignore = "requires a running mongod on localhost:27017"]
async fn deleting_unknown_campaign_returns_not_found() {
    let _ = std::thread::spawn(|| crowdfund_server::run(test_config()));
    // give the server a moment to bind
    std::thread::sleep(Duration::from_millis(500));

    let client = Client::default();
    let response = client
        .delete(format!(
            "http://localhost:8080/campaigns/CMP-{}",
            uuid::Uuid::new_v4()
        ))
        .insert_header(("Authorization", "Bearer sesame"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), awc::http::StatusCode::NOT_FOUND);
}
