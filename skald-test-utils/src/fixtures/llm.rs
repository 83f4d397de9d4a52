//! LLM completion mock endpoint helpers.

use mockito::Mock;

use crate::TestContext;

pub struct LlmFixtures<'a> {
    pub(crate) context: &'a mut TestContext,
}

impl<'a> LlmFixtures<'a> {
    /// Mock `POST /v1/chat/completions` returning the given assistant message
    /// content.
    pub fn with_completion_endpoint(&mut self, content: &str, expected_requests: usize) -> Mock {
        let body = serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-test",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content,
                },
                "finish_reason": "stop",
            }],
            "usage": {
                "prompt_tokens": 100,
                "completion_tokens": 50,
                "total_tokens": 150,
            },
        });

        self.context
            .server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock the completion endpoint failing with a 500.
    pub fn with_failing_completion_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.context
            .server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_body("llm error")
            .expect(expected_requests)
            .create()
    }
}
