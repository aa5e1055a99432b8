//! Span exporter that appends OTLP/JSON lines to a rotating file.

use super::otlp;
use super::rotating::{RotatingFile, DEFAULT_KEEP, DEFAULT_MAX_BYTES};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    stopped: bool,
}

impl FileSpanExporter {
    const fn new(file: RotatingFile, resource: Resource) -> Self {
        Self {
            file,
            resource,
            stopped: false,
        }
    }

    fn write(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("file exporter already shut down"));
        }
        if batch.is_empty() {
            return Ok(());
        }

        let line = otlp::encode_batch(&self.resource, batch).to_string();
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(format!("writing {}: {e}", self.file.path().display())))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider whose spans are written synchronously to
/// `file_path` as OTLP/JSON, one batch per line.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let file = RotatingFile::new(file_path, DEFAULT_MAX_BYTES, DEFAULT_KEEP);
    let exporter = FileSpanExporter::new(file, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn spans_land_in_the_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dialpick-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "dialpick")]);

        let provider = create_tracer_provider(path.clone(), resource);
        let tracer = provider.tracer("test");
        tracer.in_span("choose_country", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(
            doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["name"],
            "choose_country"
        );
    }

    #[test]
    fn export_after_shutdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("t.json"), DEFAULT_MAX_BYTES, DEFAULT_KEEP);
        let mut exporter = FileSpanExporter::new(file, Resource::empty());
        exporter.shutdown();
        assert!(exporter.write(&[]).is_err());
    }
}
