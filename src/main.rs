//! Thai Storefront - interactive session over stdin

use anyhow::Result;
use thai_storefront::pipeline::{filter_products, sort_products, ProductFilter, SortKey, ALL_CATEGORIES};
use thai_storefront::{Checkout, Locale, Session, StorefrontConfig, StorefrontError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "commands:
  products [sort] [category]      list products (sort: price-low, price-high, name-th, name-en, featured)
  search <text>                   debounced search in the current language
  show <id>                       product details
  add <id> [size] [color] [qty]   add to cart (use - to skip size or color)
  qty <line> <n>                  set a line's quantity (0 removes)
  remove <line>                   remove a line
  clear                           empty the cart
  cart                            show the cart
  summary                         checkout totals
  lang [th|en]                    show or switch language
  quit";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();

    let config = StorefrontConfig::from_env()?;
    let mut session = Session::start(&config);
    tracing::info!(locale = %session.language.locale(), items = session.cart.item_count(), "storefront session started");
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else { continue };
        if command == "quit" { break; }
        if let Err(e) = run(&mut session, &config, command, args).await {
            println!("! {e}");
        }
    }
    Ok(())
}

async fn run(session: &mut Session, config: &StorefrontConfig, command: &str, args: &[&str]) -> thai_storefront::Result<()> {
    let locale = session.language.locale();
    match command {
        "products" => {
            let sort = args.first().map_or(config.default_sort, |s| SortKey::parse(s));
            let category = args.get(1).copied().unwrap_or(ALL_CATEGORIES);
            let all = session.catalog.products().await;
            let listed = sort_products(&filter_products(&all, &ProductFilter::default().category(category)), sort);
            for p in &listed {
                let stock = if p.in_stock { "" } else { " (out of stock)" };
                println!("{:>3}  {:<32} {:>8}{stock}", p.id, p.name_in(locale), p.price.to_string());
            }
        }
        "search" => {
            let query = args.join(" ");
            let mut rx = session.search.subscribe();
            session.search.input(query, locale);
            if rx.changed().await.is_ok() {
                for p in &rx.borrow().products {
                    println!("{:>3}  {}", p.id, p.name_in(locale));
                }
            }
        }
        "show" => {
            let id = args.first().copied().unwrap_or_default();
            let p = session.catalog.product_by_id(id).await?;
            println!("{} - {}\n{}\nsizes: {}\ncolors: {}", p.name_in(locale), p.price, p.description_in(locale), p.sizes.join(", "), p.colors.join(", "));
        }
        "add" => {
            let id = args.first().copied().unwrap_or_default();
            let product = session.catalog.product_by_id(id).await?;
            let pick = |i: usize| args.get(i).copied().filter(|v| *v != "-");
            let qty = args.get(3).and_then(|q| q.parse().ok()).unwrap_or(1);
            let line = session.cart.add(&product, pick(1), pick(2), qty).map_err(StorefrontError::from)?;
            println!("added to line {line}; {} items, {}", session.cart.item_count(), session.cart.total());
        }
        "qty" => {
            let (Some(line), Some(n)) = (args.first(), args.get(1).and_then(|n| n.parse().ok())) else {
                println!("usage: qty <line> <n>");
                return Ok(());
            };
            session.cart.update_quantity(line, n);
        }
        "remove" => {
            if let Some(line) = args.first() { session.cart.remove(line); }
        }
        "clear" => session.cart.clear(),
        "cart" => {
            for item in session.cart.items() {
                let variant = [item.size.as_deref(), item.color.as_deref()].into_iter().flatten().collect::<Vec<_>>().join("/");
                println!("{}  {} [{variant}] x{} = {}", item.cart_item_id, item.name.get(locale), item.quantity, item.line_total());
            }
            println!("{} items, total {}", session.cart.item_count(), session.cart.total());
        }
        "summary" => {
            let s = Checkout::summary(&session.cart);
            println!("subtotal {}\nshipping {}\nvat      {}\ntotal    {}", s.subtotal, s.shipping, s.tax, s.total);
        }
        "lang" => {
            match args.first().map(|code| code.parse::<Locale>()) {
                Some(Ok(l)) => session.language.set(l),
                Some(Err(e)) => println!("{e}"),
                None => {}
            }
            println!("language: {}", session.language.locale());
        }
        "help" => println!("{HELP}"),
        other => println!("unknown command `{other}`, try help"),
    }
    Ok(())
}
