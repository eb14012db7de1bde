use tracing::{Event, Subscriber};
use tracing_subscriber::{layer::Context, Layer, EnvFilter, Registry};
use tracing_subscriber::prelude::*;

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{:?}", value));
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

impl MessageVisitor {
    fn line(&self) -> String {
        if self.fields.is_empty() {
            self.message.clone()
        } else {
            format!("{} ({})", self.message, self.fields.join(", "))
        }
    }
}

struct CustomLayer;

impl<S: Subscriber> Layer<S> for CustomLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if metadata.target().starts_with("hyper") || metadata.target().starts_with("reqwest") {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if visitor.message.is_empty() && visitor.fields.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let line = visitor.line();

        match metadata.level().as_str() {
            "ERROR" => eprintln!("[{}] ❌ Error: {} - {}", timestamp, metadata.target(), line),
            "WARN" => eprintln!("[{}] ⚠️ Warning: {} - {}", timestamp, metadata.target(), line),
            "INFO" => println!("[{}] ℹ️ {} - {}", timestamp, metadata.target(), line),
            "DEBUG" => println!("[{}] 🔄 {} - {}", timestamp, metadata.target(), line),
            _ => {}
        }
    }
}

pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stargift_bot=info,tower_http=info"));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(CustomLayer);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set subscriber");
}
