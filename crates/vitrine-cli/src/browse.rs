//! Interactive page session driven by stdin.
//!
//! Each input line becomes a [`UiEvent`] on the session's queue. Search
//! keystrokes go through the session's debouncer, which posts the settled
//! term back onto the same queue.

use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use vitrine_catalog::CatalogClient;
use vitrine_core::{AppConfig, SortMode};
use vitrine_ui::{
    terminal_prefers_dark, CardTarget, Effect, FileThemeStore, ModalTarget, PageRequest,
    PageSession, SessionSettings, UiEvent,
};

use crate::render;

pub(crate) const HELP: &str = "\
comandos:
  busca <termo>        filtra por nome, descrição ou categoria
  categoria <valor>    seleciona uma categoria (all = todas)
  promo on|off         somente promoções
  ordem <modo>         default, price-asc, price-desc, name-asc, name-desc
  ver <id>             abre o detalhe do produto
  mockups <id>         abre a galeria de mockups
  qtd <n>              altera a quantidade no detalhe
  orcamento            solicita orçamento pelo WhatsApp
  fechar | esc         fecha o detalhe
  tema                 alterna claro/escuro
  rolar <px> | topo    rolagem
  pagina               mostra a página inteira
  sair";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Event(UiEvent),
    ShowPage,
    Help,
    Quit,
}

/// Parses one input line.
///
/// # Errors
///
/// Returns a user-facing message for unknown commands or bad arguments.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, a)| (v, a.trim()));

    let parse_id = |arg: &str| {
        arg.parse::<u64>()
            .map_err(|_| format!("id inválido: {arg:?}"))
    };

    let command = match verb {
        "busca" => Command::Event(UiEvent::SearchInput(arg.to_owned())),
        "categoria" => Command::Event(UiEvent::CategorySelected(arg.to_owned())),
        "promo" => match arg {
            "on" | "sim" => Command::Event(UiEvent::PromoToggled(true)),
            "off" | "nao" | "não" => Command::Event(UiEvent::PromoToggled(false)),
            other => return Err(format!("use promo on|off, não {other:?}")),
        },
        "ordem" => {
            let sort: SortMode = arg.parse().map_err(|e| format!("{e}"))?;
            Command::Event(UiEvent::SortSelected(sort))
        }
        "ver" => Command::Event(UiEvent::CardClicked {
            id: parse_id(arg)?,
            target: CardTarget::Body,
        }),
        "mockups" => Command::Event(UiEvent::CardClicked {
            id: parse_id(arg)?,
            target: CardTarget::MockupLink,
        }),
        "qtd" => Command::Event(UiEvent::QuantityChanged(arg.to_owned())),
        "orcamento" | "orçamento" => Command::Event(UiEvent::QuoteRequested),
        "fechar" => Command::Event(UiEvent::ModalClicked(ModalTarget::CloseButton)),
        "esc" => Command::Event(UiEvent::KeyPressed("Escape".to_owned())),
        "tema" => Command::Event(UiEvent::ThemeToggled),
        "rolar" => {
            let offset = arg
                .parse::<f64>()
                .map_err(|_| format!("deslocamento inválido: {arg:?}"))?;
            Command::Event(UiEvent::Scrolled(offset))
        }
        "topo" => Command::Event(UiEvent::BackToTopClicked),
        "pagina" | "página" => Command::ShowPage,
        "ajuda" | "help" | "?" => Command::Help,
        "sair" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("comando desconhecido: {other} (digite ajuda)")),
    };
    Ok(Some(command))
}

/// Runs a session until `sair` or end of input.
pub(crate) async fn run_browse(config: &AppConfig, campaign: Option<String>) -> anyhow::Result<()> {
    let client = CatalogClient::from_config(config).context("failed to build catalog client")?;
    let request = match campaign {
        Some(id) => PageRequest::Campaign { id: Some(id) },
        None => PageRequest::Catalog,
    };
    let store = FileThemeStore::new(&config.theme_path);
    let prefers_dark = terminal_prefers_dark(std::env::var("COLORFGBG").ok().as_deref());
    let reload_delay = Duration::from_millis(config.reload_delay_ms);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = PageSession::bootstrap(
        &client,
        request,
        SessionSettings::from_config(config),
        store,
        prefers_dark,
        &tx,
    )
    .await;

    println!("{}", render::page(&session.page()));
    println!("{HELP}");

    // The reader task owns the only strong sender; the queue closes when it
    // stops.
    let (show_tx, mut show_rx) = mpsc::unbounded_channel();
    tokio::spawn(read_stdin(tx, show_tx));

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                for effect in session.handle(event) {
                    apply(effect, reload_delay).await;
                }
            }
            Some(()) = show_rx.recv() => println!("{}", render::page(&session.page())),
        }
    }
    Ok(())
}

async fn read_stdin(tx: UnboundedSender<UiEvent>, show_page: UnboundedSender<()>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                break;
            }
        };
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Event(event))) => {
                if tx.send(event).is_err() {
                    break;
                }
            }
            Ok(Some(Command::ShowPage)) => {
                if show_page.send(()).is_err() {
                    break;
                }
            }
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Quit)) => break,
            Err(message) => println!("{message}"),
        }
    }
}

async fn apply(effect: Effect, reload_delay: Duration) {
    match effect {
        Effect::Reloading => {
            println!("Atualizando...");
            tokio::time::sleep(reload_delay).await;
        }
        Effect::Grid(grid) => print!("{}", render::grid(&grid)),
        Effect::ModalOpened(detail) => print!("{}", render::detail(&detail)),
        Effect::ModalClosed => println!("(detalhe fechado)"),
        Effect::OpenLink(url) => println!("Abrir em nova janela: {url}"),
        Effect::ThemeApplied(theme) => println!("Tema: {theme}"),
        Effect::BackToTopVisible(true) => println!("[↑ topo]"),
        Effect::BackToTopVisible(false) => {}
        Effect::ScrollToTop => println!("(voltou ao topo)"),
    }
}
