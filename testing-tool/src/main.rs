use anyhow::{Context, Result};
use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🐯 Tigers Seminovos Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = prompt_with_default("URL del servidor", "http://localhost:3000")?;
    let client = reqwest::Client::new();

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🔍 Buscar en el catálogo");
        println!("2. 🎛️  Ver opciones de filtros");
        println!("3. 🚗 Ver detalle de un vehículo");
        println!("4. 📝 Enviar lead de contacto");
        println!("5. 💳 Enviar análisis de crédito");
        println!("6. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-6)")?;

        let result = match choice.as_str() {
            "1" => search_catalog(&client, &base_url).await,
            "2" => show_options(&client, &base_url).await,
            "3" => show_vehicle(&client, &base_url).await,
            "4" => send_contact(&client, &base_url).await,
            "5" => send_credit_analysis(&client, &base_url).await,
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                continue;
            }
        };

        if let Err(e) = result {
            println!("{} {:#}", "❌ Error:".bright_red().bold(), e);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", format!("{}: ", label).bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn prompt_with_default(label: &str, default: &str) -> Result<String> {
    let value = prompt(&format!("{} [{}]", label, default))?;
    Ok(if value.is_empty() { default.to_string() } else { value })
}

async fn search_catalog(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let mut params: Vec<(&str, String)> = Vec::new();
    for key in ["make", "model", "color", "armor", "year_min", "year_max", "body", "q", "page"] {
        let value = prompt(&format!("{} (vacío = sin filtro)", key))?;
        if !value.is_empty() {
            params.push((key, value));
        }
    }

    let body = get_json(client, &format!("{}/api/catalog/vehicles", base_url), &params).await?;

    println!();
    println!(
        "{} {} resultados, página {}/{}",
        "📊".bright_blue(),
        body["total_items"],
        body["page"],
        body["total_pages"]
    );
    for item in body["items"].as_array().into_iter().flatten() {
        println!(
            "  #{:<4} {:<32} {:<10} {:>10} km  {}",
            item["id"],
            item["name"].as_str().unwrap_or_default(),
            item["year_label"].as_str().unwrap_or_default(),
            item["km_label"].as_str().unwrap_or_default(),
            item["color"].as_str().unwrap_or_default()
        );
    }
    Ok(())
}

async fn show_options(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let make = prompt("Marca (vacío = todas)")?;
    let model = prompt("Modelo (vacío = todos)")?;
    let mut params = Vec::new();
    if !make.is_empty() {
        params.push(("make", make));
    }
    if !model.is_empty() {
        params.push(("model", model));
    }

    let body = get_json(client, &format!("{}/api/catalog/options", base_url), &params).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn show_vehicle(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let id = prompt("ID del vehículo")?;
    let body = get_json(client, &format!("{}/api/catalog/vehicles/{}", base_url, id), &[]).await?;

    println!();
    println!("{}", body["name"].as_str().unwrap_or_default().bright_cyan().bold());
    println!("🖼️  Galería: {}", body["gallery"]["counter"]);
    println!("💬 WhatsApp: {}", body["whatsapp_url"].as_str().unwrap_or_default());
    Ok(())
}

async fn send_contact(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let vehicle_id: u32 = prompt("ID del vehículo")?
        .parse()
        .context("el ID debe ser numérico")?;
    let payload = json!({
        "vehicle_id": vehicle_id,
        "nome": prompt("Nome")?,
        "telefone": prompt("Telefone")?,
        "email": prompt("E-mail")?,
        "loja": prompt_with_default("Loja (barra, botafogo, niteroi)", "barra")?,
    });

    println!("{}", "⏳ Enviando...".bright_blue());
    let body = post_json(client, &format!("{}/api/leads/contact", base_url), &payload).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn send_credit_analysis(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let payload = json!({ "cpf": prompt("CPF")? });

    println!("{}", "⏳ Enviando...".bright_blue());
    let body = post_json(client, &format!("{}/api/leads/credit-analysis", base_url), &payload).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn get_json(client: &reqwest::Client, url: &str, params: &[(&str, String)]) -> Result<Value> {
    let response = client.get(url).query(params).send().await?;
    read_response(response).await
}

async fn post_json(client: &reqwest::Client, url: &str, payload: &Value) -> Result<Value> {
    let response = client.post(url).json(payload).send().await?;
    read_response(response).await
}

async fn read_response(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if status.is_success() {
        println!("{} {}", "✅".bright_green(), status);
    } else {
        println!("{} {}", "⚠️".bright_red(), status);
    }
    Ok(body)
}
