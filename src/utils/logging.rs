use crate::config::Config;
/// Logging helpers
///
/// Banner and progress output shared by the orchestration layer
use tracing::{info, warn};

/// Log startup information
///
/// # Arguments
/// - `config`: the effective configuration
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Readability statistics run");
    info!("📁 Input folder: {}", config.folder_path);
    info!("📄 Output table: {}", config.output_csv_path);
    if config.skip_failed_documents {
        info!("⚠️ Failed documents are skipped and logged to {}", config.failure_log_file);
    }
    info!("{}", "=".repeat(60));
}

/// Log how many documents were found
///
/// # Arguments
/// - `total`: number of matching documents
/// - `extension`: the extension that was matched
pub fn log_documents_found(total: usize, extension: &str) {
    if total == 0 {
        warn!("⚠️ No .{} documents found, writing an empty table", extension);
    } else {
        info!("✓ Found {} .{} documents", total, extension);
    }
}

/// Progress line for one document
pub fn log_document_start(name: &str) {
    info!("Processing {}...", name);
}

/// Print the final statistics
///
/// # Arguments
/// - `processed`: rows written
/// - `failed`: documents skipped
/// - `total`: documents found
/// - `output_path`: where the table went
pub fn print_final_stats(processed: usize, failed: usize, total: usize, output_path: &str) {
    info!("{}", "=".repeat(60));
    info!("📊 Run complete");
    info!(
        "Finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ Processed: {}/{}", processed, total);
    if failed > 0 {
        warn!("❌ Skipped: {}", failed);
    }
    info!("{}", "=".repeat(60));
    info!("Readability and additional statistics saved to {}", output_path);
}

/// Truncate long text for log display
///
/// # Arguments
/// - `text`: original text
/// - `max_len`: maximum number of characters kept
///
/// # Returns
/// The truncated text, with newlines flattened
pub fn truncate_text(text: &str, max_len: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > max_len {
        flat.chars().take(max_len).collect::<String>() + "..."
    } else {
        flat
    }
}
