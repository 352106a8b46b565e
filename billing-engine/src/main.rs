use std::sync::Arc;

use anyhow::Context;
use billing_engine::{
    BillDraft, BillingSession, BillingStore, RandomSplit, TableView, form, print_banner, sample,
    setup_environment,
};
use shared::models::BillingCategory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment();
    print_banner();

    tracing::info!(
        timezone = %config.business_timezone,
        environment = %config.environment,
        "Billing engine starting"
    );

    // 2. Deferred sample load
    let store = Arc::new(BillingStore::new());
    let added = sample::spawn_load(store.clone(), &config)
        .await
        .context("sample load task failed")??;
    tracing::info!(added, "Session ready");

    let session = BillingSession::new(store, config.business_timezone);

    // 3. One bill through the entry flow
    let mut draft = BillDraft::new(BillingCategory::Sweets, session.today());
    draft.set_bill_start("9000");
    draft.set_bill_end("9009");
    draft.set_total_amount("10500");
    draft.calculate(&mut RandomSplit::from_entropy())?;
    let record = session.submit(&mut draft)?;
    println!("{} ({})", form::success_message(record.category()), record.bill_nos);

    // 4. Dashboard
    let metrics = session.dashboard();
    tracing::debug!(dashboard = %serde_json::to_string(&metrics)?, "Dashboard computed");
    println!();
    for widget in metrics.widgets() {
        println!("  {:<32} {}", widget.title, widget.value);
    }
    println!();

    // 5. One CSV per category
    let visible = session.visible_records();
    for category in BillingCategory::ALL {
        let mut view = TableView::new(Some(category)).with_page_size(config.default_page_size)?;
        let page = view.page(&visible);
        let export = view.export_csv(&visible, session.today());
        let path = export
            .write_to(&config.export_dir)
            .with_context(|| format!("failed to export {}", category))?;
        println!(
            "  {:<20} {:<16} -> {}",
            category.display_name(),
            view.range_label(page.total as usize),
            path.display()
        );
    }

    Ok(())
}
