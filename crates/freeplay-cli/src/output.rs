//! Rendering of the current page to stdout

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use freeplay_core::{Game, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
    Csv,
}

#[derive(Serialize)]
struct PageJson<'a> {
    page: usize,
    total_pages: usize,
    matched: usize,
    games: Vec<&'a Game>,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    title: &'a str,
    platform: &'a str,
    genre: &'a str,
    publisher: &'a str,
    game_url: &'a str,
}

pub fn render(out: &mut impl Write, state: &ViewState, format: Format) -> Result<()> {
    match format {
        Format::Table => render_table(out, state),
        Format::Json => render_json(out, state),
        Format::Csv => render_csv(out, state),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn render_table(out: &mut impl Write, state: &ViewState) -> Result<()> {
    let visible = state.visible();
    if visible.is_empty() {
        writeln!(out, "No games to display")?;
        return Ok(());
    }

    writeln!(out, "{:>6}  {:<40}  {:<24}  {}", "ID", "Title", "Platform", "Genre")?;
    for game in &visible {
        writeln!(
            out,
            "{:>6}  {:<40}  {:<24}  {}",
            game.id,
            truncate(&game.title, 40),
            truncate(&game.platform, 24),
            game.genre.as_deref().unwrap_or("-")
        )?;
    }
    writeln!(
        out,
        "\nPage {} of {} ({} games)",
        state.current_page(),
        state.total_pages(),
        state.filtered().len()
    )?;
    Ok(())
}

fn render_json(out: &mut impl Write, state: &ViewState) -> Result<()> {
    let page = PageJson {
        page: state.current_page(),
        total_pages: state.total_pages(),
        matched: state.filtered().len(),
        games: state.visible(),
    };
    serde_json::to_writer_pretty(&mut *out, &page)?;
    writeln!(out)?;
    Ok(())
}

fn render_csv(out: &mut impl Write, state: &ViewState) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for game in state.visible() {
        writer.serialize(CsvRow {
            id: game.id,
            title: &game.title,
            platform: &game.platform,
            genre: game.genre.as_deref().unwrap_or_default(),
            publisher: game.publisher.as_deref().unwrap_or_default(),
            game_url: &game.game_url,
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use freeplay_core::{CatalogConfig, CatalogEvent, Variant};

    fn game(id: i64, title: &str) -> Game {
        Game {
            id,
            title: title.to_string(),
            short_description: String::new(),
            thumbnail: String::new(),
            platform: "PC (Windows)".to_string(),
            game_url: format!("https://www.freetogame.com/open/{}", id),
            genre: Some("MMORPG".to_string()),
            publisher: None,
            developer: None,
            release_date: None,
            freetogame_profile_url: None,
        }
    }

    fn state_with(games: Vec<Game>) -> ViewState {
        let (state, request) =
            ViewState::new(CatalogConfig::new(Variant::Compact)).apply(CatalogEvent::Mounted);
        let seq = request.unwrap().seq;
        state.apply(CatalogEvent::FetchCompleted { seq, result: Ok(games) }).0
    }

    fn rendered(state: &ViewState, format: Format) -> String {
        let mut buf = Vec::new();
        render(&mut buf, state, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table() {
        let state = state_with(vec![game(1, "Dota 2"), game(2, "Fortnite")]);
        let text = rendered(&state, Format::Table);
        assert!(text.contains("Dota 2"));
        assert!(text.contains("MMORPG"));
        assert!(text.ends_with("Page 1 of 1 (2 games)\n"));
    }

    #[test]
    fn test_table_empty() {
        let state = state_with(vec![]);
        assert_eq!(rendered(&state, Format::Table), "No games to display\n");
    }

    #[test]
    fn test_json_only_contains_current_page() {
        let games = (0..13).map(|i| game(i, &format!("Game {}", i))).collect();
        let state = state_with(games);
        let state = state.apply(CatalogEvent::NextPage).0;
        let value: serde_json::Value = serde_json::from_str(&rendered(&state, Format::Json)).unwrap();
        assert_eq!(value["page"], 2);
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["matched"], 13);
        assert_eq!(value["games"].as_array().unwrap().len(), 1);
        assert_eq!(value["games"][0]["id"], 12);
    }

    #[test]
    fn test_csv() {
        let state = state_with(vec![game(7, "Warframe, Prime")]);
        let text = rendered(&state, Format::Csv);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,title,platform,genre,publisher,game_url"));
        assert_eq!(
            lines.next(),
            Some("7,\"Warframe, Prime\",PC (Windows),MMORPG,,https://www.freetogame.com/open/7")
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
