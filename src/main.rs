use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use order_store::domain::checkout::{Order, OrderItem};
use order_store::domain::customer::{Address, Customer};
use order_store::domain::product::{Product, ProductUpdate};
use order_store::{
    CustomerRepository, Database, DatabaseConfig, OrderRepository, ProductRepository,
    RepositoryInterface, RepositoryMetrics,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_store=debug")),
        )
        .init();

    // === 1. Connect and create tables ===
    let config = DatabaseConfig::from_env();
    let database = Database::connect(&config).await?;
    database.sync().await?;

    // === 2. Repositories share the pool and one metrics registry ===
    let metrics = Arc::new(RepositoryMetrics::new()?);
    let customers = CustomerRepository::new(database.pool().clone()).with_metrics(metrics.clone());
    let products = ProductRepository::new(database.pool().clone()).with_metrics(metrics.clone());
    let orders = OrderRepository::new(database.pool().clone()).with_metrics(metrics.clone());

    // === 3. Catalog and customer ===
    let mut customer = Customer::new(Uuid::new_v4().to_string(), "customer 1")?;
    customer.change_address(Address::new("Rua 15", 105, "70277", "Brasilia")?);
    customer.activate()?;
    customers.create(&customer).await?;

    let product = Product::new(Uuid::new_v4().to_string(), "product 1", 10.0)?;
    products.create(&product).await?;

    // === 4. Order lifecycle ===
    let order_id = Uuid::new_v4().to_string();
    let item = OrderItem::new(
        Uuid::new_v4().to_string(),
        product.name(),
        product.price(),
        product.id(),
        2,
    );
    let order = Order::new(order_id.clone(), customer.id(), vec![item])?;
    orders.create(&order).await?;
    tracing::info!(order_id = %order_id, total = order.total(), "✅ Order placed");

    // Repricing the product does not touch the stored order
    products
        .update(ProductUpdate {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: 12.5,
        })
        .await?;

    let replacement = OrderItem::new(
        Uuid::new_v4().to_string(),
        product.name(),
        product.price(),
        product.id(),
        3,
    );
    orders
        .update(Order::new(order_id.clone(), customer.id(), vec![replacement])?)
        .await?;

    let stored = orders.find(&order_id).await?;
    tracing::info!(
        order_id = %stored.id(),
        item_count = stored.items().len(),
        total = stored.total(),
        "✅ Order updated"
    );

    // === 5. Report ===
    println!("{}", metrics.encode()?);

    database.close().await;
    Ok(())
}
