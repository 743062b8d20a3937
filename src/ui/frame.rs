//! Text frame: puzzle board and scoreboard side by side, dialogue box below

use crate::game::{GameStateView, Speech};

/// Cells per board row
pub const BOARD_WIDTH: usize = 12;
/// Rows on the board
pub const BOARD_ROWS: usize = 4;
/// Characters per line in the dialogue box
pub const DIALOGUE_WIDTH: usize = 60;

const CATEGORY_WIDTH: usize = 39;
const NAME_WIDTH: usize = 14;
const CASH_WIDTH: usize = 13;

/// Board outline; each `%` is one cell, `$` is the category plate
const BOARD_TEMPLATE: [&str; 11] = [
    "    ╔═══╦═══╦═══╦═══╦═══╦═══╦═══╦═══╦═══╦═══╦═══╦═══╗     ╔",
    "    ║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║     ║",
    "╔═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╗ ║",
    "║   ║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║   ║ ╠",
    "╠═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╣ ║",
    "║   ║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║   ║ ║",
    "╚═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╬═══╝ ╠",
    "    ║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║ %║     ║",
    "    ╚═══╬═══╩═══╩═══╩═══╩═══╩═══╩═══╩═══╩═══╩═══╬═══╝     ║",
    "        ║$║         ╚",
    "        ╚═══════════════════════════════════════╝",
];

fn len(s: &str) -> usize {
    s.chars().count()
}

/// Pad on the right to `width` characters, truncating longer text
fn ljust(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let pad = width.saturating_sub(len(&out));
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Center in `width` characters, extra space going to the right
fn center(s: &str, width: usize) -> String {
    let s: String = s.chars().take(width).collect();
    let pad = width.saturating_sub(len(&s));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// Break a phrase into rows of at most [`BOARD_WIDTH`] characters
///
/// Words are kept whole. The leading row takes as many words as fit and the
/// rest is split again. A single word wider than a row is cut into pieces.
pub fn split_rows(phrase: &str) -> Vec<String> {
    if len(phrase) <= BOARD_WIDTH {
        return vec![phrase.to_string()];
    }

    let words: Vec<&str> = phrase.split_whitespace().collect();
    for take in (1..words.len()).rev() {
        let head = words[..take].join(" ");
        if len(&head) <= BOARD_WIDTH {
            let mut rows = vec![head];
            rows.extend(split_rows(&words[take..].join(" ")));
            return rows;
        }
    }

    // First word alone is too wide
    let chars: Vec<char> = phrase.chars().collect();
    let head: String = chars[..BOARD_WIDTH].iter().collect();
    let rest: String = chars[BOARD_WIDTH..].iter().collect();
    let mut rows = vec![head];
    rows.extend(split_rows(rest.trim_start()));
    rows
}

/// Fit the phrase onto the 4x12 board, centered both ways
///
/// Returns exactly [`BOARD_ROWS`] rows of [`BOARD_WIDTH`] characters.
pub fn layout_board(phrase: &str) -> Vec<String> {
    let mut rows = split_rows(phrase);
    rows.truncate(BOARD_ROWS);

    let count = rows.len();
    let mut lines = vec![String::new(); (BOARD_ROWS - count) / 2];
    lines.extend(rows);
    lines.resize(BOARD_ROWS, String::new());

    let indent = lines
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| (BOARD_WIDTH - len(l)) / 2)
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|l| ljust(&format!("{}{}", " ".repeat(indent), l), BOARD_WIDTH))
        .collect()
}

/// Draw the puzzle board with the category underneath
pub fn render_board(phrase: &str, category: &str) -> Vec<String> {
    let cells: String = layout_board(phrase).concat();
    let mut cells = cells.chars();
    let plate = center(category, CATEGORY_WIDTH);

    BOARD_TEMPLATE
        .iter()
        .map(|line| {
            let mut out = String::new();
            for c in line.chars() {
                match c {
                    '%' => {
                        out.push(cells.next().unwrap_or(' '));
                        out.push(' ');
                    }
                    '$' => out.push_str(&plate),
                    other => out.push(other),
                }
            }
            out
        })
        .collect()
}

/// Scoreboard with one block per seat
///
/// `♦` marks the active seat. Round cash is shown while a round is being
/// played, banked cash between rounds.
pub fn render_scoreboard(view: &GameStateView) -> Vec<String> {
    let mut lines = vec!["═════════════════╗".to_string()];
    let count = view.players().len();
    for (seat, player) in view.players().iter().enumerate() {
        let marker = if seat == view.active_seat() { '♦' } else { ' ' };
        let cash = if view.round_active() {
            player.round_cash()
        } else {
            player.total_cash()
        };
        lines.push(format!(" {marker} {}║", ljust(player.name.as_str(), NAME_WIDTH)));
        lines.push(format!("   ${}║", ljust(&cash.to_string(), CASH_WIDTH)));
        lines.push(if seat + 1 == count {
            "═════════════════╝".to_string()
        } else {
            "═════════════════╣".to_string()
        });
    }
    lines
}

/// Split dialogue into at most two lines of [`DIALOGUE_WIDTH`]
pub fn wrap_dialogue(text: &str) -> (String, String) {
    if len(text) <= DIALOGUE_WIDTH {
        return (text.to_string(), String::new());
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut first = 0;
    while first < words.len() && len(&words[..=first].join(" ")) <= DIALOGUE_WIDTH {
        first += 1;
    }
    let first = first.max(1);
    (words[..first].join(" "), words[first..].join(" "))
}

/// Speaker plate and dialogue box
pub fn render_dialogue(speech: &Speech) -> Vec<String> {
    let (line_1, line_2) = wrap_dialogue(&speech.text);
    let bar = "═".repeat(DIALOGUE_WIDTH + 1);
    vec![
        format!(" ╔═══════════╦═{bar}╗"),
        format!(" ║{}║ {}║", center(&speech.speaker, 11), ljust(&line_1, DIALOGUE_WIDTH + 1)),
        format!(" ╚═══════════╣ {}║", ljust(&line_2, DIALOGUE_WIDTH + 1)),
        format!("             ╚═{bar}╝"),
    ]
}

/// The whole screen for one step of the game
pub fn render_frame(view: &GameStateView, speech: &Speech) -> String {
    let board = view.board();
    let board_lines = render_board(&board.masked(), board.category().as_str());
    let score_lines = render_scoreboard(view);

    let mut lines: Vec<String> = board_lines
        .iter()
        .enumerate()
        .map(|(i, line)| match score_lines.get(i) {
            Some(score) => format!("{line}{score}"),
            None => line.clone(),
        })
        .collect();
    lines.extend(render_dialogue(speech));
    lines.join("\n")
}
