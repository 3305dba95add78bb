mod api;
mod console;

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use serde_json::{json, Value};

use crate::api::{ApiClient, EntityKind};
use crate::console::{
    build_payload, descriptor, passphrase_matches, record_id, AdminSession,
    DEFAULT_ADMIN_PASSWORD,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let base_url = env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
    let admin_token = env::var("ADMIN_TOKEN").ok();

    let client = ApiClient::new(&base_url, admin_token);

    println!("Portfolio admin console ({base_url})");

    // Unauthenticated -> Authenticated happens only on a passphrase match.
    loop {
        let Some(input) = prompt("Password: ")? else {
            return Ok(());
        };

        if passphrase_matches(&input, &password) {
            break;
        }
        println!("Invalid password");
    }

    let mut session = AdminSession::new();
    fetch_all(&client, &mut session).await;

    println!("Type 'help' for commands.");

    loop {
        let Some(line) = prompt(&format!("portfolio-admin[{}]> ", session.active.tab_name()))?
        else {
            return Ok(());
        };

        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let arg = parts.next().unwrap_or_default().trim();

        match command {
            "" => {}
            "help" => print_help(),
            "use" => match EntityKind::from_tab_name(arg) {
                Some(kind) => session.active = kind,
                None => println!("Unknown tab '{arg}' (projects, experiences, certifications)"),
            },
            "list" => render_list(&session),
            "add" => {
                if let Err(e) = add_record(&client, &mut session).await {
                    println!("Error saving item: {e}");
                }
            }
            "edit" => {
                if let Err(e) = edit_record(&client, &mut session, arg).await {
                    println!("Error saving item: {e}");
                }
            }
            "delete" => {
                if let Err(e) = delete_record(&client, &mut session, arg).await {
                    println!("Error deleting item: {e}");
                }
            }
            "refresh" => fetch_all(&client, &mut session).await,
            "contact" => {
                if let Err(e) = send_test_contact(&client).await {
                    println!("Error sending message: {e}");
                }
            }
            "quit" | "exit" => return Ok(()),
            other => println!("Unknown command '{other}'; type 'help'"),
        }
    }
}

/// Eagerly loads all three lists in parallel on entering the console.
async fn fetch_all(client: &ApiClient, session: &mut AdminSession) {
    let (projects, experiences, certifications) = tokio::join!(
        client.list(EntityKind::Projects),
        client.list(EntityKind::Experiences),
        client.list(EntityKind::Certifications),
    );

    for (kind, fetched) in [
        (EntityKind::Projects, projects),
        (EntityKind::Experiences, experiences),
        (EntityKind::Certifications, certifications),
    ] {
        match fetched {
            Ok(items) => {
                println!("Loaded {} {}(s)", items.len(), kind.label());
                session.set_list(kind, items);
            }
            Err(e) => println!("Error fetching {}: {e}", kind.tab_name()),
        }
    }
}

fn render_list(session: &AdminSession) {
    let d = descriptor(session.active);
    let items = session.items(session.active);

    if items.is_empty() {
        println!("No {}s", session.active.label());
        return;
    }

    for (i, item) in items.iter().enumerate() {
        let headline = item
            .get(d.headline)
            .and_then(Value::as_str)
            .unwrap_or("<untitled>");
        println!("{:>3}. {}", i + 1, headline);
    }
}

async fn add_record(client: &ApiClient, session: &mut AdminSession) -> Result<()> {
    let kind = session.active;
    let d = descriptor(kind);

    let Some(answers) = collect_answers(d, None)? else {
        return Ok(());
    };
    let payload = build_payload(d, &answers, None);

    let created = client.create(kind, &payload).await?;
    println!("Created {}", kind.label());
    session.append(kind, created);
    Ok(())
}

async fn edit_record(client: &ApiClient, session: &mut AdminSession, arg: &str) -> Result<()> {
    let kind = session.active;
    let d = descriptor(kind);

    let Some(existing) = pick_record(session, arg) else {
        return Ok(());
    };
    let Some(id) = record_id(&existing).map(str::to_string) else {
        println!("Record has no id; refresh and try again");
        return Ok(());
    };

    let Some(answers) = collect_answers(d, Some(&existing))? else {
        return Ok(());
    };
    let payload = build_payload(d, &answers, Some(&existing));

    let updated = client.update(kind, &id, &payload).await?;
    println!("Updated {}", kind.label());
    if !session.replace(kind, updated) {
        println!("Saved on server but missing locally; run 'refresh'");
    }
    Ok(())
}

async fn delete_record(client: &ApiClient, session: &mut AdminSession, arg: &str) -> Result<()> {
    let kind = session.active;

    let Some(target) = pick_record(session, arg) else {
        return Ok(());
    };
    let Some(id) = record_id(&target).map(str::to_string) else {
        println!("Record has no id; refresh and try again");
        return Ok(());
    };

    let Some(answer) = prompt("Are you sure you want to delete this item? [y/N] ")? else {
        return Ok(());
    };
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }

    client.delete(kind, &id).await?;
    println!("Deleted {}", kind.label());
    session.remove(kind, &id);
    Ok(())
}

async fn send_test_contact(client: &ApiClient) -> Result<()> {
    let mut fields = Vec::new();
    for label in ["Name", "Email", "Subject", "Message"] {
        let Some(value) = prompt(&format!("{label}: "))? else {
            return Ok(());
        };
        fields.push(value.trim().to_string());
    }

    let body = json!({
        "name": fields[0],
        "email": fields[1],
        "subject": fields[2],
        "message": fields[3],
    });

    let reply = client.send_contact(&body).await?;
    println!(
        "{}",
        reply
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Message sent")
    );
    Ok(())
}

/// Runs the form for one record: prompts per field, shows the current value
/// when editing. Returns None when stdin closes mid-form.
fn collect_answers(
    d: &console::EntityDescriptor,
    existing: Option<&Value>,
) -> Result<Option<Vec<String>>> {
    let mut answers = Vec::with_capacity(d.fields.len());

    for spec in d.fields {
        let current = existing
            .and_then(|e| e.get(spec.key))
            .map(render_current)
            .unwrap_or_default();

        let text = if current.is_empty() {
            format!("{}: ", spec.label)
        } else {
            format!("{} [{}]: ", spec.label, current)
        };

        let Some(answer) = prompt(&text)? else {
            return Ok(None);
        };
        answers.push(answer);
    }

    Ok(Some(answers))
}

fn render_current(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn pick_record(session: &AdminSession, arg: &str) -> Option<Value> {
    let items = session.items(session.active);

    let Ok(index) = arg.parse::<usize>() else {
        println!("Usage: edit|delete <number> (see 'list')");
        return None;
    };

    match items.get(index.checked_sub(1)?) {
        Some(item) => Some(item.clone()),
        None => {
            println!("No item {index}; run 'list'");
            None
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  use <projects|experiences|certifications>  switch tab");
    println!("  list           show the active tab's records");
    println!("  add            create a record (form)");
    println!("  edit <n>       edit record n from 'list'");
    println!("  delete <n>     delete record n (asks for confirmation)");
    println!("  refresh        re-fetch all lists from the server");
    println!("  contact        send a test contact-form message");
    println!("  quit           leave the console");
}

/// Reads one line from stdin; None on EOF.
fn prompt(text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
