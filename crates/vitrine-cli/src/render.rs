//! Plain-text rendering of the storefront view models.

use std::fmt::Write as _;

use vitrine_ui::{GridView, PageView, ProductCard, ProductDetail};

const NAME_WIDTH: usize = 32;

pub(crate) fn truncate_for_display(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{truncated}...")
    }
}

pub(crate) fn cards_table(cards: &[ProductCard]) -> String {
    let mut out = format!(
        "{:<6} {:<NAME_WIDTH$} {:<20} {:>12}  {}\n",
        "ID", "NOME", "CATEGORIA", "PREÇO", ""
    );
    out.push_str(&"-".repeat(80));
    out.push('\n');
    for card in cards {
        let mut flags = Vec::new();
        if let Some(badge) = card.promo_badge {
            flags.push(badge.to_owned());
        }
        if let Some(link) = &card.mockup_link {
            flags.push(format!("{}: {}", link.text, link.url));
        }
        let _ = writeln!(
            out,
            "{:<6} {:<NAME_WIDTH$} {:<20} {:>12}  {}",
            card.id,
            truncate_for_display(&card.name, NAME_WIDTH),
            card.category_label,
            card.price_label,
            flags.join("  ")
        );
    }
    out
}

pub(crate) fn grid(grid: &GridView) -> String {
    match grid {
        GridView::Loading => "Carregando...\n".to_owned(),
        GridView::Cards { cards } => cards_table(cards),
        GridView::Empty { message } | GridView::Failed { message } => format!("{message}\n"),
    }
}

pub(crate) fn detail(detail: &ProductDetail) -> String {
    let mut out = format!("== {} ==\n", detail.name);
    let _ = writeln!(out, "{}", detail.price_label);
    let _ = writeln!(out, "{}", detail.stock_line);
    if !detail.description.is_empty() {
        let _ = writeln!(out, "\n{}", detail.description);
    }
    if !detail.spec_rows.is_empty() {
        out.push('\n');
        for row in &detail.spec_rows {
            let _ = writeln!(out, "{:<10} {}", format!("{}:", row.label), row.value);
        }
    }
    let q = &detail.quantity;
    let _ = writeln!(
        out,
        "\nQuantidade: {} (mín. {}, máx. {})  [{}: orcamento]",
        q.value, q.min, q.max, detail.quote_button
    );
    out
}

pub(crate) fn page(page: &PageView) -> String {
    let mut out = format!("# {}  [tema: {}]\n", page.document_title, page.theme);
    if let Some(header) = &page.header {
        let _ = writeln!(out, "\n{}", header.title);
        if let Some(description) = &header.description {
            let _ = writeln!(out, "{description}");
        }
    }
    if !page.category_options.is_empty() {
        let selected = page
            .category_options
            .iter()
            .find(|o| o.selected)
            .map_or("", |o| o.label.as_str());
        let sort = page
            .sort_options
            .iter()
            .find(|o| o.selected)
            .map_or("", |o| o.label);
        let _ = writeln!(
            out,
            "busca: {:?}  categoria: {selected}  promoções: {}  ordem: {sort}",
            page.search_term,
            if page.promo_only { "sim" } else { "não" },
        );
    }
    out.push('\n');
    out.push_str(&grid(&page.grid));
    if let Some(modal) = &page.modal {
        out.push('\n');
        out.push_str(&detail(modal));
    }
    out
}
