use serde::Serialize;

use crate::engine::core::Record;
use crate::engine::grouping::GroupedResult;
use crate::engine::schema::FieldDescriptor;
use crate::shared::response::render::Renderer;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonResponse<'a> {
    count: usize,
    fields: &'a [FieldDescriptor],
    rows: &'a [Record],
}

impl Renderer for JsonRenderer {
    fn render(&self, result: &GroupedResult) -> Vec<u8> {
        let body = JsonResponse {
            count: result.rows.len(),
            fields: &result.fields,
            rows: &result.rows,
        };
        let mut out = serde_json::to_vec_pretty(&body).unwrap_or_else(|_| b"{}".to_vec());
        out.push(b'\n');
        out
    }
}
