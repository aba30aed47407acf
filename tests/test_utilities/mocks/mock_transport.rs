use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use sw360_graph::prelude::*;

/// Mock transport serving canned payloads and recording every fetch
#[derive(Default, Clone)]
pub struct MockTransport {
    payloads: HashMap<(ResourceKind, String), Value>,
    pub fetches: Rc<RefCell<Vec<(ResourceKind, String)>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ResourceKind, id: &str, payload: Value) -> Self {
        self.payloads.insert((kind, id.to_string()), payload);
        self
    }

    pub fn fetch_count(&self, kind: ResourceKind, id: &str) -> usize {
        self.fetches
            .borrow()
            .iter()
            .filter(|(k, i)| *k == kind && i == id)
            .count()
    }

    fn serve(&self, kind: ResourceKind, id: &str) -> std::result::Result<Value, TransportError> {
        self.fetches.borrow_mut().push((kind, id.to_string()));
        self.payloads
            .get(&(kind, id.to_string()))
            .cloned()
            .ok_or_else(|| TransportError::NotFound {
                kind,
                id: id.to_string(),
            })
    }
}

impl Sw360Transport for MockTransport {
    fn get_release(&self, id: &str) -> std::result::Result<Value, TransportError> {
        self.serve(ResourceKind::Release, id)
    }

    fn get_component(&self, id: &str) -> std::result::Result<Value, TransportError> {
        self.serve(ResourceKind::Component, id)
    }

    fn get_project(&self, id: &str) -> std::result::Result<Value, TransportError> {
        self.serve(ResourceKind::Project, id)
    }

    fn get_attachment(&self, id: &str) -> std::result::Result<Value, TransportError> {
        self.serve(ResourceKind::Attachment, id)
    }
}

impl ProjectSearch for MockTransport {
    fn find_projects_by_name(&self, name: &str) -> std::result::Result<Vec<Value>, TransportError> {
        let mut found: Vec<(&String, &Value)> = self
            .payloads
            .iter()
            .filter(|((kind, _), payload)| {
                *kind == ResourceKind::Project
                    && payload.get("name").and_then(Value::as_str) == Some(name)
            })
            .map(|((_, id), payload)| (id, payload))
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        Ok(found.into_iter().map(|(_, payload)| payload.clone()).collect())
    }
}
