//! Console demonstration of the products domain.
//!
//! Builds one product, prints it, then adds and removes stock, printing after
//! each step. Every step reports its own failure and the run carries on.

pub mod config;

use std::io::{self, Write};

pub use config::{ConfigError, DemoConfig, SampleProduct};

/// Run the demo sequence, writing its report to `out`.
///
/// Domain failures are written to `out` as part of the report; only IO errors
/// are returned.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> io::Result<()> {
    writeln!(out, "Products")?;

    let mut product = match config.sample.build() {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!(error = %e, "could not create sample product");
            writeln!(out, "Error creating product: {e}")?;
            return Ok(());
        }
    };
    writeln!(out, "{}", product.describe_with(&config.currency))?;

    match product.increase_stock(config.adjust_qty) {
        Ok(()) => writeln!(out, "{}", product.describe_with(&config.currency))?,
        Err(e) => {
            tracing::warn!(error = %e, qty = config.adjust_qty, "increase failed");
            writeln!(out, "Error increasing stock: {e}")?;
        }
    }

    match product.decrease_stock(config.adjust_qty) {
        Ok(()) => writeln!(out, "{}", product.describe_with(&config.currency))?,
        Err(e) => {
            tracing::warn!(error = %e, qty = config.adjust_qty, "decrease failed");
            writeln!(out, "Error decreasing stock: {e}")?;
        }
    }

    Ok(())
}
