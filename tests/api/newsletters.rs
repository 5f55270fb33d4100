use chrono::{DateTime, Duration, Utc};
use newsletter_api::store::NewsletterStore;
use serde_json::{json, Value};

use crate::helpers::{id_from_self_link, spawn_app, BASE_URL};

#[tokio::test]
async fn create_returns_a_201_with_the_serialized_newsletter() {
    let test_app = spawn_app().await;

    let response = test_app.post_newsletters("title=A&body=B").await;

    assert_eq!(201, response.status().as_u16());
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["title"], "A");

    let published_at: DateTime<Utc> = created["published_at"]
        .as_str()
        .expect("`published_at` is not a string")
        .parse()
        .expect("`published_at` is not a timestamp");
    assert!(Utc::now() - published_at < Duration::seconds(30));
}

#[tokio::test]
async fn serialized_newsletters_expose_only_title_date_and_links() {
    let test_app = spawn_app().await;
    let id = test_app
        .create_newsletter("Weekly%20digest", "Not%20for%20the%20wire")
        .await;

    let newsletter: Value = test_app
        .get(&format!("/newsletters/{id}"))
        .await
        .json()
        .await
        .unwrap();

    let object = newsletter.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["published_at", "title", "url"]);
    assert_eq!(
        newsletter["url"],
        json!({
            "self": format!("{BASE_URL}/newsletters/{id}"),
            "collection": format!("{BASE_URL}/newsletters"),
        })
    );
}

#[tokio::test]
async fn create_returns_a_400_when_data_is_missing() {
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("title=Hello", "missing the body"),
        ("body=World", "missing the title"),
        ("", "missing both title and body"),
        ("title=%20%20&body=World", "blank title"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.post_newsletters(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {error_message}."
        );
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }
    assert!(test_app.list_newsletters().await.is_empty());
}

#[tokio::test]
async fn collection_grows_by_one_after_a_create() {
    let test_app = spawn_app().await;
    test_app.create_newsletter("First", "one").await;
    let before = test_app.list_newsletters().await.len();

    let id = test_app.create_newsletter("Second", "two").await;

    let after = test_app.list_newsletters().await;
    assert_eq!(after.len(), before + 1);

    let item: Value = test_app
        .get(&format!("/newsletters/{id}"))
        .await
        .json()
        .await
        .unwrap();
    assert!(item["url"]["self"]
        .as_str()
        .unwrap()
        .ends_with(&format!("/newsletters/{id}")));
}

#[tokio::test]
async fn collection_reads_are_stable_without_writes() {
    let test_app = spawn_app().await;
    test_app.create_newsletter("First", "one").await;
    test_app.create_newsletter("Second", "two").await;

    let first = test_app.list_newsletters().await;
    let second = test_app.list_newsletters().await;

    assert_eq!(first, second);
    let titles: Vec<_> = first.iter().map(|n| n["title"].clone()).collect();
    assert_eq!(titles, [json!("First"), json!("Second")]);
}

#[tokio::test]
async fn get_returns_a_404_for_an_unknown_id() {
    let test_app = spawn_app().await;

    let response = test_app.get("/newsletters/4242").await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn patch_changes_only_the_provided_fields() {
    let test_app = spawn_app().await;
    let id = test_app.create_newsletter("Original", "Body").await;
    let before: Value = test_app
        .get(&format!("/newsletters/{id}"))
        .await
        .json()
        .await
        .unwrap();

    let response = test_app.patch_newsletter(id, "title=Changed").await;

    assert_eq!(200, response.status().as_u16());
    let patched: Value = response.json().await.unwrap();
    assert_eq!(patched["title"], "Changed");

    let after: Value = test_app
        .get(&format!("/newsletters/{id}"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(after["title"], "Changed");
    assert_eq!(after["published_at"], before["published_at"]);
    assert_eq!(after["url"], before["url"]);
}

#[tokio::test]
async fn patch_rejects_fields_outside_the_allow_list() {
    let test_app = spawn_app().await;
    let id = test_app.create_newsletter("Original", "Body").await;
    let test_cases = vec![
        ("id=99", "the identifier"),
        ("title=Changed&published_at=2000-01-01", "the publication date"),
        ("author=someone", "an unknown field"),
        ("body=", "an empty body"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.patch_newsletter(id, invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when patching {error_message}."
        );
    }

    let unchanged: Value = test_app
        .get(&format!("/newsletters/{id}"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(unchanged["title"], "Original");
    assert_eq!(id_from_self_link(&unchanged), id);
}

#[tokio::test]
async fn patch_with_no_fields_leaves_the_newsletter_untouched() {
    let test_app = spawn_app().await;
    let id = test_app.create_newsletter("Original", "Body").await;

    let response = test_app.patch_newsletter(id, "").await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Original");
}

#[tokio::test]
async fn patch_returns_a_404_for_an_unknown_id() {
    let test_app = spawn_app().await;

    let response = test_app.patch_newsletter(4242, "title=Changed").await;

    assert_eq!(404, response.status().as_u16());
    assert!(test_app.list_newsletters().await.is_empty());
}

#[tokio::test]
async fn delete_removes_the_newsletter() {
    let test_app = spawn_app().await;
    let keep = test_app.create_newsletter("Keep", "me").await;
    let id = test_app.create_newsletter("Drop", "me").await;

    let response = test_app.delete_newsletter(id).await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "record successfully deleted" }));

    assert_eq!(
        404,
        test_app
            .get(&format!("/newsletters/{id}"))
            .await
            .status()
            .as_u16()
    );
    let remaining: Vec<_> = test_app
        .list_newsletters()
        .await
        .iter()
        .map(id_from_self_link)
        .collect();
    assert_eq!(remaining, [keep]);
}

#[tokio::test]
async fn repeated_deletes_do_not_change_the_collection() {
    let test_app = spawn_app().await;
    test_app.create_newsletter("Keep", "me").await;
    let id = test_app.create_newsletter("Drop", "me").await;
    assert_eq!(200, test_app.delete_newsletter(id).await.status().as_u16());
    let count = test_app.list_newsletters().await.len();

    for _ in 0..3 {
        let response = test_app.delete_newsletter(id).await;
        assert_eq!(404, response.status().as_u16());
    }

    assert_eq!(test_app.list_newsletters().await.len(), count);
}

#[tokio::test]
async fn patch_can_replace_the_body_alone() {
    let test_app = spawn_app().await;
    let id = test_app.create_newsletter("Original", "Old%20body").await;
    let before = test_app.store.get(id).await.unwrap().unwrap();

    let response = test_app.patch_newsletter(id, "body=New%20body").await;

    assert_eq!(200, response.status().as_u16());
    let patched: Value = response.json().await.unwrap();
    assert_eq!(patched["title"], "Original");
    assert!(patched.get("body").is_none());

    let after = test_app.store.get(id).await.unwrap().unwrap();
    assert_eq!(after.body, "New body");
    assert_eq!(after.title, before.title);
    assert_eq!(after.published_at, before.published_at);
}

#[tokio::test]
async fn titles_longer_than_256_characters_are_rejected() {
    let test_app = spawn_app().await;
    let too_long = "a".repeat(257);

    let response = test_app
        .post_newsletters(format!("title={too_long}&body=B"))
        .await;
    assert_eq!(400, response.status().as_u16());
    assert!(test_app.list_newsletters().await.is_empty());

    let id = test_app.create_newsletter(&"a".repeat(256), "B").await;
    let response = test_app
        .patch_newsletter(id, format!("title={too_long}"))
        .await;
    assert_eq!(400, response.status().as_u16());
    let stored = test_app.store.get(id).await.unwrap().unwrap();
    assert_eq!(stored.title, "a".repeat(256));
}
