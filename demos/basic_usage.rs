//! Basic factory and stream usage example
//!
//! Demonstrates minting loggers from a factory and emitting chained
//! statements to stdout.
//!
//! Run with: cargo run --example basic_usage

use micro_logger::LoggerFactory;

fn main() {
    println!("=== Micro Logger - Basic Usage Example ===\n");

    let factory = LoggerFactory::builder(std::io::stdout())
        .app_name("Shop")
        .name_padding(10)
        .build();

    println!("1. Four severity streams:");
    let orders = factory.create("orders");
    orders.debug.append("cart rebuilt in ").append(12).append("ms");
    orders.info.append("order ").append(1042).append(" accepted");
    orders.warning.append("inventory low: ").append(3).append(" left");
    orders.error.append("payment gateway timeout");

    println!("\n2. Accented logger names:");
    let payments = factory.create_with_accent("payments", "\x1b[35m");
    payments.info.append("charge of ").append(19.99).append(" captured");
    payments.info.append("settlement batch ").append(77).append(" queued");

    println!("\n3. Statements spread over several appends:");
    let total = 3;
    let mut shipped = 0;
    for parcel in ["A-1", "A-2", "B-7"] {
        shipped += 1;
        orders
            .info
            .append("parcel ")
            .append(parcel)
            .append(" shipped (")
            .append(shipped)
            .append("/")
            .append(total)
            .append(")");
    }

    println!("\n=== Example completed successfully! ===");
}
