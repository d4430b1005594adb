use std::io;
use std::sync::{Arc, Mutex};

use rosestock_core::{InventoryError, Item};
use rosestock_inventory::{Inventory, RuleRegistry};
use rosestock_observability::TracingSink;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn engine_failures_flow_through_tracing_sink() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(move || writer.clone())
        .finish();

    let registry = RuleRegistry::with_builtins();
    let mut inventory = Inventory::new(vec![Item::new("Aged Brie", 1, 1), Item::new("", 2, 2)])
        .with_registry(&registry)
        .with_sink(Arc::new(TracingSink));

    let err = tracing::subscriber::with_default(subscriber, || {
        inventory.advance_one_day().unwrap_err()
    });

    assert!(matches!(err, InventoryError::UpdateFailure { ref category, .. } if category.is_empty()));
    assert_eq!(inventory.items()[0], Item::new("Aged Brie", 0, 2));

    let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    let sink_line = out
        .lines()
        .find(|line| line.contains(r#""message":"failed to update item""#))
        .unwrap_or_else(|| panic!("no sink event in output:\n{out}"));

    assert!(sink_line.contains(r#""level":"ERROR""#), "{sink_line}");
    assert!(sink_line.contains(r#""category":"""#), "{sink_line}");
    assert!(sink_line.contains(r#""days_remaining":2"#), "{sink_line}");
    assert!(
        sink_line.contains(
            r#""cause":"invalid item: item at days_remaining=2 with quality=2 must have a valid category""#
        ),
        "{sink_line}"
    );
}
