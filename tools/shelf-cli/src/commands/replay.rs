//! Scripted replay of storefront gestures.
//!
//! A script starts a fresh storefront at a given width and applies its events
//! in order. `advance` events move the virtual clock, so notification
//! dismissals can be observed without waiting.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::Deserialize;
use shelf_commerce::ProductId;
use shelf_view::{render_page, Gesture, MemoryDocument, Snapshot, Storefront};
use tracing::debug;

use super::ReplayArgs;
use crate::context::Context;
use crate::output::{banner_badge, format_millis};

/// A replay script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    /// Starting viewport width.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Events, applied in order.
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

fn default_width() -> u32 {
    1280
}

/// One scripted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptEvent {
    Add { product_id: ProductId },
    Remove { product_id: ProductId },
    Toggle,
    Close,
    Resize { width: u32 },
    Advance { ms: u64 },
}

impl Script {
    /// Load a script, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).context("Failed to parse JSON script")
        } else {
            toml::from_str(&content).context("Failed to parse TOML script")
        }
    }

    /// Apply every event to `storefront`.
    pub fn play(&self, storefront: &mut Storefront<MemoryDocument>) {
        for event in &self.events {
            debug!(?event, "replaying");
            let gesture = match *event {
                ScriptEvent::Add { product_id } => Gesture::Add(product_id),
                ScriptEvent::Remove { product_id } => Gesture::Remove(product_id),
                ScriptEvent::Toggle => Gesture::ToggleCart,
                ScriptEvent::Close => Gesture::CloseMobileCart,
                ScriptEvent::Resize { width } => Gesture::Resize(width),
                ScriptEvent::Advance { ms } => {
                    storefront.advance_by(Duration::from_millis(ms));
                    continue;
                }
            };
            storefront.handle(gesture);
        }
    }
}

/// Run the replay command.
pub fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let script = Script::load(&ctx.resolve_path(&args.script))?;
    let mut storefront = Storefront::new(&ctx.config, MemoryDocument::new(), script.width)?;
    script.play(&mut storefront);

    if let Some(page) = args.page {
        let path = ctx.resolve_path(&page);
        fs::write(&path, render_page(&ctx.config.title, storefront.document()))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    let snapshot = storefront.snapshot();
    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
    } else {
        print_summary(&snapshot, script.events.len(), ctx);
    }

    Ok(())
}

fn print_summary(snapshot: &Snapshot, events: usize, ctx: &Context) {
    ctx.output.header(&format!(
        "Replayed {} events ({})",
        events,
        format_millis(snapshot.now_ms)
    ));

    let widths = [4, 36, 14, 9];
    ctx.output.table_row(&["ID", "NAME", "LINE", "SUBTOTAL"], &widths);
    for line in &snapshot.lines {
        let id = line.product_id.to_string();
        let each = format!("{} x {}", line.unit_price, line.quantity);
        let subtotal = line.subtotal().display();
        ctx.output.table_row(
            &[id.as_str(), line.name.as_str(), each.as_str(), subtotal.as_str()],
            &widths,
        );
    }

    ctx.output.kv("Total", &snapshot.total);
    ctx.output.kv("Items", &snapshot.item_count.to_string());
    ctx.output.kv("Notification", &banner_badge(&snapshot.banner));
    ctx.output.kv(
        "Layout",
        &format!(
            "{:?} (sidebar: {}, overlay: {})",
            snapshot.layout.mode, snapshot.layout.desktop_sidebar, snapshot.layout.mobile_overlay
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_view::{Banner, StorefrontConfig};

    fn storefront(width: u32) -> Storefront<MemoryDocument> {
        Storefront::new(&StorefrontConfig::default(), MemoryDocument::new(), width).unwrap()
    }

    #[test]
    fn test_toml_script() {
        let script: Script = toml::from_str(
            r#"
width = 600

[[events]]
action = "add"
product_id = 1

[[events]]
action = "advance"
ms = 3000

[[events]]
action = "toggle"
"#,
        )
        .unwrap();

        assert_eq!(script.width, 600);
        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Add {
                    product_id: ProductId::new(1)
                },
                ScriptEvent::Advance { ms: 3000 },
                ScriptEvent::Toggle,
            ]
        );
    }

    #[test]
    fn test_json_script_defaults_width() {
        let script: Script = serde_json::from_str(
            r#"{"events": [{"action": "resize", "width": 800}, {"action": "close"}]}"#,
        )
        .unwrap();
        assert_eq!(script.width, 1280);
        assert_eq!(script.events[0], ScriptEvent::Resize { width: 800 });
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result: Result<Script, _> =
            serde_json::from_str(r#"{"events": [{"action": "checkout"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_play_drives_clock_and_cart() {
        let script = Script {
            width: 1280,
            events: vec![
                ScriptEvent::Add {
                    product_id: ProductId::new(1),
                },
                ScriptEvent::Add {
                    product_id: ProductId::new(1),
                },
                ScriptEvent::Advance { ms: 3000 },
            ],
        };
        let mut sf = storefront(script.width);
        script.play(&mut sf);

        let snapshot = sf.snapshot();
        assert_eq!(snapshot.item_count, 2);
        assert_eq!(snapshot.total, "$29.98");
        assert_eq!(snapshot.banner, Banner::Hidden);
        assert_eq!(snapshot.now_ms, 3000);
    }
}
