use fauxdoc::{FauxClient, QueryRequestOptions, Value};

fn doc(id: &str, fields: &[(&str, Value)]) -> Value {
    let mut obj = Value::object();
    let map = obj.as_object_mut().unwrap();
    map.insert("id".into(), Value::String(id.into()));
    for (k, v) in fields {
        map.insert((*k).to_string(), v.clone());
    }
    obj
}

fn ids(rows: &[Value]) -> Vec<String> {
    rows.iter()
        .map(|v| v.as_object().unwrap().get("id").unwrap().as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn round_trip_read_after_upsert() {
    let client = FauxClient::new();
    let container = client.default_database().create_container("items", "/id").await;
    container
        .upsert(doc("1", &[("Name", Value::String("Alice".into()))]), None)
        .await
        .unwrap();
    container
        .upsert(doc("1", &[("Name", Value::String("Alicia".into()))]), None)
        .await
        .unwrap();

    let read = container.read("1", None).await.unwrap();
    assert_eq!(
        read.value.as_object().unwrap().get("Name"),
        Some(&Value::String("Alicia".into()))
    );
}

#[tokio::test]
async fn select_star_without_order_by_preserves_insertion_order() {
    let client = FauxClient::new();
    let container = client.default_database().create_container("items", "/id").await;
    for i in ["3", "1", "2"] {
        container.upsert(doc(i, &[]), None).await.unwrap();
    }

    let mut feed = container
        .query_items("SELECT * FROM c", QueryRequestOptions::new())
        .await
        .unwrap();
    let page = feed.next_page().await.unwrap();
    assert_eq!(ids(&page.items), vec!["3", "1", "2"]);
}

#[tokio::test]
async fn order_by_is_non_decreasing_with_stable_ties() {
    let client = FauxClient::new();
    let container = client.default_database().create_container("items", "/id").await;
    for (id, age) in [("1", 30), ("2", 20), ("3", 20), ("4", 25)] {
        container
            .upsert(doc(id, &[("Age", Value::Integer(age))]), None)
            .await
            .unwrap();
    }

    let mut feed = container
        .query_items("SELECT * FROM c ORDER BY c.Age ASC", QueryRequestOptions::new())
        .await
        .unwrap();
    let page = feed.next_page().await.unwrap();
    assert_eq!(ids(&page.items), vec!["2", "3", "4", "1"]);
}

#[tokio::test]
async fn pagination_matches_single_shot_result() {
    let client = FauxClient::new();
    let container = client.default_database().create_container("items", "/id").await;
    for i in 1..=13 {
        container.upsert(doc(&i.to_string(), &[]), None).await.unwrap();
    }

    let mut single_shot = container
        .query_items("SELECT * FROM c", QueryRequestOptions::new())
        .await
        .unwrap();
    let expected = single_shot.next_page().await.unwrap().items;

    let mut paged = container
        .query_items("SELECT * FROM c", QueryRequestOptions::new().with_page_size(4))
        .await
        .unwrap();
    let mut collected = Vec::new();
    while let Some(page) = paged.next_page().await {
        collected.extend(page.items);
    }
    assert_eq!(collected, expected);
}

#[tokio::test]
async fn projection_closure_is_exact() {
    let client = FauxClient::new();
    let container = client.default_database().create_container("items", "/id").await;
    container
        .upsert(
            doc(
                "1",
                &[
                    ("a", Value::Integer(1)),
                    ("b", Value::Integer(2)),
                    ("c_extra", Value::Integer(3)),
                ],
            ),
            None,
        )
        .await
        .unwrap();

    let mut feed = container
        .query_items("SELECT c.a, c.b FROM c", QueryRequestOptions::new())
        .await
        .unwrap();
    let page = feed.next_page().await.unwrap();
    let mut keys: Vec<_> = page.items[0].as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["a", "b", "id"]);
}

#[tokio::test]
async fn projection_is_case_insensitive_on_property_name() {
    let client = FauxClient::new();
    let container = client.default_database().create_container("items", "/id").await;
    container
        .upsert(doc("1", &[("Name", Value::String("Alice".into()))]), None)
        .await
        .unwrap();

    let mut upper = container
        .query_items("SELECT c.NAME FROM c", QueryRequestOptions::new())
        .await
        .unwrap();
    let mut lower = container
        .query_items("SELECT c.name FROM c", QueryRequestOptions::new())
        .await
        .unwrap();

    let upper_page = upper.next_page().await.unwrap();
    let lower_page = lower.next_page().await.unwrap();
    assert_eq!(upper_page.items, lower_page.items);
}

#[tokio::test]
async fn parameter_substitution_matches_literal_equivalent() {
    let client = FauxClient::new();
    let container = client.default_database().create_container("items", "/id").await;
    for (id, age) in [("1", 40), ("2", 20)] {
        container
            .upsert(doc(id, &[("Age", Value::Integer(age))]), None)
            .await
            .unwrap();
    }

    let mut parameterized = container
        .query_items(
            "SELECT * FROM c WHERE c.Age > @minAge",
            QueryRequestOptions::new().with_parameter("minAge", Value::Integer(30)),
        )
        .await
        .unwrap();
    let mut literal = container
        .query_items("SELECT * FROM c WHERE c.Age > 30", QueryRequestOptions::new())
        .await
        .unwrap();

    assert_eq!(
        parameterized.next_page().await.unwrap().items,
        literal.next_page().await.unwrap().items
    );
}

#[tokio::test]
async fn not_on_non_boolean_is_an_evaluation_error() {
    let client = FauxClient::new();
    let container = client.default_database().create_container("items", "/id").await;
    container
        .upsert(doc("1", &[("Name", Value::String("Alice".into()))]), None)
        .await
        .unwrap();

    let result = container
        .query_items("SELECT * FROM c WHERE NOT c.Name", QueryRequestOptions::new())
        .await;
    assert!(result.is_err());
}
