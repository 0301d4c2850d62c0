use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use client::{cart::CartItem, checkout, models::Credentials, App};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Character receiving the delivery
    character: String,

    #[arg(long, default_value = "Valley of the Four Winds")]
    map: String,

    #[arg(long, default_value = "52.2")]
    x: String,

    #[arg(long, default_value = "48.7")]
    y: String,

    /// Menu item ids to order
    #[arg(long, value_delimiter = ',', default_value = "1,2")]
    items: Vec<u32>,

    /// Print both catalogs as JSON and exit
    #[arg(long)]
    list_menu: bool,

    /// Print the signed-in user's order history
    #[arg(long)]
    orders: bool,

    #[arg(long)]
    username: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Actually POST the order instead of only printing it
    #[arg(long)]
    submit: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    if args.list_menu {
        println!(
            "{}",
            serde_json::to_string_pretty(&menu::PANDAREN_MENU)?
        );
        println!("{}", serde_json::to_string_pretty(&menu::SECRET_MENU)?);
        return Ok(());
    }

    let mut app = App::new();

    if let (Some(username), Some(password)) = (args.username.clone(), args.password.clone()) {
        app.signin(&Credentials { username, password })
            .await
            .context("Sign-in failed")?;
        app.refresh_tokens().await.context("Token refresh failed")?;
        println!("Signed in, token balance: {}", app.cart.user_tokens);

        if args.orders {
            for order in app.api.user_orders().await.context("History failed")? {
                println!(
                    "Order #{}: {} gold, {}",
                    order.id,
                    order.total_amount,
                    order.status.as_deref().unwrap_or("unknown")
                );
            }
        }
    }

    app.cart.set_character_name(&args.character);
    app.cart.set_map_name(&args.map);
    app.cart.set_delivery_x(&args.x);
    app.cart.set_delivery_y(&args.y);

    for id in &args.items {
        let Some(item) = menu::find_item(*id) else {
            bail!("Unknown menu item id: {id}");
        };

        let outcome = app.cart.add_item(CartItem::from(item));
        println!("{} -> {:?}", item.name, outcome);
    }

    println!("Cart count: {}", app.cart.cart_count());
    println!("Cart total: {} gold", app.cart.cart_total());

    if args.submit {
        let confirmation = app.submit_order().await.context("Order failed")?;
        println!("Order submitted: {:?}", confirmation);
        checkout::dismiss_confirmation(&mut app.cart);
    } else {
        println!("Dry run, order not sent");
        println!("Site status: {:?}", app.site_status());
    }

    Ok(())
}
