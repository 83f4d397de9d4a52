//! Scraper service mock endpoint helpers.
//!
//! Each method registers an endpoint on the mockito server the test's scraper
//! client points at and returns the `Mock` so the test can assert on the call
//! count.

use mockito::Mock;
use scraper_client::model::ScrapedItem;

use crate::TestContext;

pub struct ScraperFixtures<'a> {
    pub(crate) context: &'a mut TestContext,
}

impl<'a> ScraperFixtures<'a> {
    /// Mock `GET /health` reporting a healthy service.
    pub fn with_health_endpoint(&mut self, status: &str, expected_requests: usize) -> Mock {
        let body = serde_json::json!({ "status": status, "version": "1.0.0" });

        self.context
            .server
            .mock("GET", "/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `POST /scrape` accepting a job with the given task ID.
    pub fn with_scrape_endpoint(&mut self, task_id: &str, expected_requests: usize) -> Mock {
        let body = serde_json::json!({
            "task_id": task_id,
            "status": "pending",
            "total_items": null,
            "processed_items": null,
            "error": null,
        });

        self.context
            .server
            .mock("POST", "/scrape")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /tasks/{task_id}` reporting the given status.
    pub fn with_task_endpoint(
        &mut self,
        task_id: &str,
        status: &str,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/tasks/{}", task_id);
        let body = serde_json::json!({
            "task_id": task_id,
            "status": status,
            "total_items": 10,
            "processed_items": 10,
            "error": null,
        });

        self.context
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `POST /test-source` returning a validation verdict.
    pub fn with_test_source_endpoint(
        &mut self,
        ok: bool,
        item_count: i32,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({
            "ok": ok,
            "item_count": item_count,
            "sample_titles": ["A post"],
            "message": null,
        });

        self.context
            .server
            .mock("POST", "/test-source")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /clients/{client_id}/contents` returning the given items.
    pub fn with_client_contents_endpoint(
        &mut self,
        client_id: i32,
        items: &[ScrapedItem],
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/clients/{}/contents", client_id);

        self.context
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(items).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Mock any endpoint failing with a 500.
    pub fn with_failing_endpoint(
        &mut self,
        method: &str,
        path: &str,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock(method, path)
            .with_status(500)
            .with_body("scraper error")
            .expect(expected_requests)
            .create()
    }
}
