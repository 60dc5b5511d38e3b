use tracing::info;

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::names;
use crate::types::{DisplayRecord, RawUser};

pub struct UserCatalog {
    client: CatalogClient,
}

impl UserCatalog {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// Run one fetch cycle. Either every record is returned or none is.
    pub async fn run(&self) -> Result<Vec<DisplayRecord>, CatalogError> {
        let users = self.client.fetch_users().await?;
        let records = assemble(users);
        info!(
            endpoint = %self.client.endpoint(),
            count = records.len(),
            "user catalog ready"
        );
        Ok(records)
    }
}

/// Order users by raw last-token sort key, then narrow them into display records.
///
/// The sort is stable, so users sharing a key keep their input order.
pub fn assemble(mut users: Vec<RawUser>) -> Vec<DisplayRecord> {
    users.sort_by_cached_key(|user| names::sort_key(&user.name));
    users.into_iter().map(DisplayRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawAddress;
    use mockito::Server;
    use serde_json::json;
    use url::Url;

    fn user(id: i64, name: &str) -> RawUser {
        RawUser {
            id,
            name: name.to_string(),
            address: RawAddress {
                street: format!("{id} Main St"),
                suite: format!("Suite {id}"),
                zipcode: format!("0000{id}"),
                city: "Springfield".to_string(),
            },
        }
    }

    fn names_of(records: &[DisplayRecord]) -> Vec<&str> {
        records.iter().map(|r| r.formatted_name.as_str()).collect()
    }

    #[test]
    fn orders_by_last_name_and_formats() {
        let records = assemble(vec![
            user(1, "Dr. Amy Zed"),
            user(2, "Bob Young"),
            user(3, "Cal Xu"),
        ]);

        assert_eq!(names_of(&records), ["Xu, Cal", "Young, Bob", "Zed, Amy (Dr.)"]);
        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = assemble(vec![
            user(10, "Zoe Adams"),
            user(11, "Ann Brown"),
            user(12, "Al Adams"),
            user(13, "Ben Adams"),
        ]);

        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), [10, 12, 13, 11]);
    }

    #[test]
    fn suffix_names_sort_by_raw_last_token() {
        let records = assemble(vec![user(1, "John Smith Jr."), user(2, "Kim Lee")]);

        // "jr." < "lee"
        assert_eq!(names_of(&records), ["Smith, John (Jr.)", "Lee, Kim"]);
    }

    #[test]
    fn preserves_ids_and_length() {
        let input: Vec<RawUser> = (1..=10)
            .rev()
            .map(|id| user(id, &format!("User{id} Name{id}")))
            .collect();
        let mut expected: Vec<i64> = input.iter().map(|u| u.id).collect();

        let records = assemble(input);
        let mut ids: Vec<i64> = records.iter().map(|r| r.id).collect();

        assert_eq!(records.len(), expected.len());
        ids.sort_unstable();
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn narrows_address_and_drops_city() {
        let records = assemble(vec![user(7, "Cal Xu")]);
        let record = &records[0];

        assert_eq!(record.address.street, "7 Main St");
        assert_eq!(record.address.suite, "Suite 7");
        assert_eq!(record.address.zipcode, "00007");

        let serialized = serde_json::to_value(record).expect("serialize");
        assert_eq!(serialized["formattedName"], "Xu, Cal");
        assert!(serialized["address"].get("city").is_none());
        assert!(!serialized.to_string().contains("Springfield"));
    }

    #[test]
    fn empty_collection_yields_empty_list() {
        assert!(assemble(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn run_fetches_and_assembles() {
        let mut server = Server::new_async().await;
        let body = json!([
            { "id": 1, "name": "Dr. Amy Zed", "address": { "street": "a", "suite": "b", "city": "c", "zipcode": "1" } },
            { "id": 2, "name": "Bob Young", "address": { "street": "d", "suite": "e", "city": "f", "zipcode": "2" } },
            { "id": 3, "name": "Cal Xu", "address": { "street": "g", "suite": "h", "city": "i", "zipcode": "3" } }
        ]);
        let mock = server
            .mock("GET", "/users")
            .with_status(200)
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/users", server.url())).expect("url");
        let records = UserCatalog::new(CatalogClient::new(url))
            .run()
            .await
            .expect("run ok");

        mock.assert_async().await;
        assert_eq!(names_of(&records), ["Xu, Cal", "Young, Bob", "Zed, Amy (Dr.)"]);
        assert_eq!(records[0].address.zipcode, "3");
    }

    #[tokio::test]
    async fn run_fails_outright_when_one_record_is_malformed() {
        let mut server = Server::new_async().await;
        let body = json!([
            { "id": 1, "name": "Cal Xu", "address": { "street": "a", "suite": "b", "city": "c", "zipcode": "1" } },
            { "id": "two", "name": "Bob Young" }
        ]);
        server
            .mock("GET", "/users")
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/users", server.url())).expect("url");
        let result = UserCatalog::new(CatalogClient::new(url)).run().await;

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn run_yields_nothing_on_network_failure() {
        let url = Url::parse("http://127.0.0.1:1/users").expect("url");
        let result = UserCatalog::new(CatalogClient::new(url)).run().await;

        assert!(matches!(result, Err(CatalogError::Transport(_))));
    }
}
