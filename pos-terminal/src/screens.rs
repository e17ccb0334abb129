//! Dashboard and Order screens rendered as plain text

use pos_client::{
    DashboardEntry, HttpOrderService, Navigator, OrderService, OrderSession, Route, RouteParams,
    Selection, SessionPhase, SessionView, StackNavigator,
};

use crate::config::Config;
use crate::console::Console;

const HELP: &str = "\
  c          pick category
  p          pick product
  q <n>      set quantity
  a          add item
  r <n>      remove item n
  s          send order
  d          delete order
  h          help";

/// Order screen commands
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    PickCategory,
    PickProduct,
    Quantity(String),
    Add,
    Remove(String),
    Send,
    Delete,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let command = match head {
        "c" => Command::PickCategory,
        "p" => Command::PickProduct,
        "q" => Command::Quantity(rest.to_string()),
        "a" => Command::Add,
        "r" => Command::Remove(rest.to_string()),
        "s" => Command::Send,
        "d" => Command::Delete,
        "h" | "?" => Command::Help,
        _ => return None,
    };
    Some(command)
}

/// Drive the screens until stdin closes
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let service = HttpOrderService::from_config(&config.client)?;
    let mut navigator = StackNavigator::new();
    let mut dashboard = match &config.waiter_name {
        Some(name) => DashboardEntry::new().with_name(name.clone()),
        None => DashboardEntry::new(),
    };
    let mut console = Console::new();

    loop {
        let keep_going = match navigator.current().clone() {
            Route::Dashboard => {
                dashboard_screen(&mut console, &mut dashboard, &service, &mut navigator).await?
            }
            Route::Order(params) => {
                order_screen(&mut console, params, &service, &mut navigator).await?
            }
        };
        if !keep_going {
            return Ok(());
        }
    }
}

/// One round of the Dashboard. Returns `false` on end of input.
async fn dashboard_screen(
    console: &mut Console,
    dashboard: &mut DashboardEntry,
    service: &dyn OrderService,
    navigator: &mut dyn Navigator,
) -> anyhow::Result<bool> {
    println!("── New order ──");
    let Some(line) = console.prompt("Table number: ").await? else {
        return Ok(false);
    };

    dashboard.set_input(line);
    match dashboard.open_order(service, navigator).await {
        Ok(Some(params)) => println!("✅ Table {} opened ({})\n", params.number, params.order_id),
        Ok(None) => {}
        Err(e) => console.notify(&e).await?,
    }
    Ok(true)
}

/// The Order screen, from activation until it leaves the stack.
/// Returns `false` on end of input.
async fn order_screen(
    console: &mut Console,
    params: RouteParams,
    service: &dyn OrderService,
    navigator: &mut dyn Navigator,
) -> anyhow::Result<bool> {
    let mut session = OrderSession::new(params);

    while session.phase() == SessionPhase::Loading {
        match session.load(service).await {
            Ok(()) => {}
            // Categories arrived; only the product list is missing
            Err(e) if session.phase() == SessionPhase::Ready => console.notify(&e).await?,
            Err(e) => {
                console.notify(&e).await?;
                let Some(answer) = console.prompt("[Enter] retry, d delete order: ").await? else {
                    return Ok(false);
                };
                if answer == "d" {
                    close(console, &mut session, service, navigator).await?;
                    return Ok(true);
                }
            }
        }
    }

    loop {
        render(&session.view());
        let Some(line) = console.prompt("> ").await? else {
            return Ok(false);
        };
        let Some(command) = parse_command(&line) else {
            println!("{}", HELP);
            continue;
        };

        match command {
            Command::PickCategory => pick_category(console, &mut session, service).await?,
            Command::PickProduct => pick_product(console, &mut session).await?,
            Command::Quantity(text) => session.set_quantity(text),
            Command::Add => match session.add_item(service).await {
                Ok(item) => println!("✅ {} x{} added", item.name, item.amount),
                Err(e) => console.notify(&e).await?,
            },
            Command::Remove(position) => {
                let item_id = position
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| session.items().get(i))
                    .map(|item| item.item_id.clone());
                match item_id {
                    Some(item_id) => {
                        if let Err(e) = session.remove_item(service, &item_id).await {
                            console.notify(&e).await?;
                        }
                    }
                    None => println!("No item {:?}", position),
                }
            }
            Command::Send => match session.advance(service, navigator).await {
                Ok(sent) => {
                    println!(
                        "✅ Order for table {} sent ({} items)\n",
                        sent.number,
                        sent.items.len()
                    );
                    return Ok(true);
                }
                Err(e) => console.notify(&e).await?,
            },
            Command::Delete => {
                if close(console, &mut session, service, navigator).await? {
                    return Ok(true);
                }
            }
            Command::Help => println!("{}", HELP),
        }
    }
}

/// Delete the order. Returns whether the screen was left.
async fn close(
    console: &mut Console,
    session: &mut OrderSession,
    service: &dyn OrderService,
    navigator: &mut dyn Navigator,
) -> anyhow::Result<bool> {
    match session.close_order(service, navigator).await {
        Ok(()) => {
            println!("🗑  Order for table {} deleted\n", session.number());
            Ok(true)
        }
        Err(e) => {
            console.notify(&e).await?;
            Ok(false)
        }
    }
}

async fn pick_category(
    console: &mut Console,
    session: &mut OrderSession,
    service: &dyn OrderService,
) -> anyhow::Result<()> {
    let selector = match session.open_category_picker() {
        Ok(selector) => selector.clone(),
        Err(e) => return console.notify(&e).await,
    };
    let names: Vec<&str> = selector.options().iter().map(|c| c.name.as_str()).collect();
    let selection = match choose(console, "Category", &names).await? {
        Some(index) => selector.pick(index),
        None => Ok(selector.dismiss()),
    };

    let result = match selection {
        Ok(selection) => session.resolve_category_picker(service, selection).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        session.dismiss_category_picker();
        console.notify(&e).await?;
    }
    Ok(())
}

async fn pick_product(console: &mut Console, session: &mut OrderSession) -> anyhow::Result<()> {
    let selector = match session.open_product_picker() {
        Ok(selector) => selector.clone(),
        Err(e) => return console.notify(&e).await,
    };
    let names: Vec<&str> = selector.options().iter().map(|p| p.name.as_str()).collect();
    let selection = match choose(console, "Product", &names).await? {
        Some(index) => selector.pick(index),
        None => Ok(Selection::Dismissed),
    };

    let result = selection.and_then(|selection| session.resolve_product_picker(selection));
    if let Err(e) = result {
        session.dismiss_product_picker();
        console.notify(&e).await?;
    }
    Ok(())
}

/// List options and read a 1-based choice; blank (or end of input) dismisses
async fn choose(
    console: &mut Console,
    title: &str,
    names: &[&str],
) -> anyhow::Result<Option<usize>> {
    println!("── {} ──", title);
    for (i, name) in names.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
    let answer = console.prompt("Choose (blank to close): ").await?;
    Ok(answer.filter(|a| !a.is_empty()).map(|a| {
        a.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .unwrap_or(usize::MAX)
    }))
}

fn render(view: &SessionView<'_>) {
    println!("\n── {} ──", view.title);
    if view.category_trigger {
        let name = view.selected_category.map(|c| c.name.as_str()).unwrap_or("-");
        println!("Category: {}", name);
    }
    let product = view.selected_product.map(|p| p.name.as_str()).unwrap_or("-");
    println!("Product:  {}", product);
    println!("Quantity: {}", view.quantity);
    if !view.items.is_empty() {
        println!("Items:");
        for (i, item) in view.items.iter().enumerate() {
            println!("  {}. {} x{}", i + 1, item.name, item.amount);
        }
    }
}
