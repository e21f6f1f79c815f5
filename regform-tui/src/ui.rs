//! Renders the application state into a [`Buffer`] each frame.

use crossterm::style::Color;
use regform_core::{Field, FieldStatus, sanitize_preview};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, FocusTarget};
use crate::banner::BannerLevel;
use crate::screen::{Buffer, TextStyle};
use crate::theme::{Theme, default_theme};

/// Column where the result panels start when the screen is wide enough.
const SPLIT_X: u16 = 58;
/// Columns reserved for field labels.
const LABEL_WIDTH: u16 = 23;
/// Inner width of an input box, in cells.
const INPUT_WIDTH: u16 = 26;

pub fn draw(app: &App, width: u16, height: u16) -> Buffer {
    let theme = default_theme();
    let mut buf = Buffer::new(width, height);
    buf.fill(0, 0, width, height, theme.background);

    let wide = width >= SPLIT_X + 30;
    let limit = if wide { SPLIT_X - 2 } else { width };
    draw_form(&mut buf, app, &theme, limit);
    if wide {
        draw_panels(&mut buf, app, &theme, SPLIT_X);
    }
    draw_banners(&mut buf, app, &theme, width);
    buf
}

fn draw_form(buf: &mut Buffer, app: &App, theme: &Theme, limit: u16) {
    let mut y = 1;
    buf.set_string(
        2,
        y,
        "Registration Form",
        TextStyle::new(theme.primary, theme.background).bold(),
    );
    y += 1;
    buf.set_string(
        2,
        y,
        "Every field validates as you type.",
        TextStyle::new(theme.muted, theme.background),
    );
    y += 2;

    for field in Field::TEXT {
        y = draw_text_field(buf, app, theme, field, y, limit);
        if field == Field::Password {
            y = draw_checklist(buf, app, theme, y);
        }
    }

    y = draw_terms_row(buf, app, theme, y);
    y += 1;
    y = draw_buttons(buf, app, theme, y);
    y += 1;
    draw_footer(buf, theme, y);
}

/// One field row: label, input box, status mark, and the error line while
/// the field is invalid. A shaking row renders one cell to the right with
/// the error accent. Returns the row after everything drawn.
fn draw_text_field(
    buf: &mut Buffer,
    app: &App,
    theme: &Theme,
    field: Field,
    y: u16,
    limit: u16,
) -> u16 {
    let focused = app.focus() == FocusTarget::Field(field);
    let shaking = app.is_shaking(field);
    let x = 2 + u16::from(shaking);

    let label_style = if shaking {
        TextStyle::new(theme.error, theme.background)
    } else if focused {
        TextStyle::new(theme.text, theme.background).bold()
    } else {
        TextStyle::new(theme.text, theme.background)
    };
    buf.set_string(x, y, field.label(), label_style);

    let masked = matches!(field, Field::Password | Field::ConfirmPassword);
    draw_input_box(
        buf,
        theme,
        x + LABEL_WIDTH,
        y,
        app.text(field),
        app.cursor(field),
        masked,
        focused,
    );

    let mark_x = x + LABEL_WIDTH + INPUT_WIDTH + 3;
    match app.status(field) {
        FieldStatus::Valid => {
            buf.set_string(mark_x, y, "✓", TextStyle::new(theme.success, theme.background));
        }
        FieldStatus::Invalid => {
            buf.set_string(mark_x, y, "✗", TextStyle::new(theme.error, theme.background));
        }
        FieldStatus::Unset => {}
    }

    let mut next = y + 1;
    if app.status(field) == FieldStatus::Invalid {
        let message = field.error_message().unwrap_or_default();
        set_clipped(
            buf,
            x + 2,
            next,
            limit,
            message,
            TextStyle::new(theme.error, theme.background),
        );
        next += 1;
    }
    next
}

/// `[` value `]` with the value window scrolled so the cursor stays visible.
/// Password values render as bullets, one per character.
#[allow(clippy::too_many_arguments)]
fn draw_input_box(
    buf: &mut Buffer,
    theme: &Theme,
    x: u16,
    y: u16,
    raw: &str,
    cursor: usize,
    masked: bool,
    focused: bool,
) {
    let bracket = if focused {
        TextStyle::new(theme.primary, theme.background)
    } else {
        TextStyle::new(theme.border, theme.background)
    };
    buf.set_string(x, y, "[", bracket);
    buf.set_string(x + 1 + INPUT_WIDTH, y, "]", bracket);
    buf.fill(x + 1, y, INPUT_WIDTH, 1, theme.surface);

    let bullets;
    let shown = if masked {
        bullets = "•".repeat(raw.chars().count());
        bullets.as_str()
    } else {
        raw
    };

    let value = TextStyle::new(theme.text, theme.surface);
    let inverted = TextStyle::new(theme.background, theme.primary);
    let skip = cursor.saturating_sub(INPUT_WIDTH as usize - 1);
    let end = x + 1 + INPUT_WIDTH;
    let mut col = x + 1;
    let mut tmp = [0u8; 4];
    for (i, ch) in shown.chars().enumerate().skip(skip) {
        let w = ch.width().unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if col + w > end {
            break;
        }
        let style = if focused && i == cursor { inverted } else { value };
        col = buf.set_string(col, y, ch.encode_utf8(&mut tmp), style);
    }
    if focused && cursor >= shown.chars().count() && col < end {
        buf.set_string(col, y, " ", inverted);
    }
}

/// The four password criteria, aligned under the password input.
fn draw_checklist(buf: &mut Buffer, app: &App, theme: &Theme, y: u16) -> u16 {
    let mut y = y;
    let x = 2 + LABEL_WIDTH;
    for (label, met) in app.strength().checklist() {
        if met {
            buf.set_string(x, y, "✓", TextStyle::new(theme.success, theme.background));
            buf.set_string(x + 2, y, label, TextStyle::new(theme.text, theme.background));
        } else {
            buf.set_string(x, y, "○", TextStyle::new(theme.muted, theme.background));
            buf.set_string(x + 2, y, label, TextStyle::new(theme.muted, theme.background));
        }
        y += 1;
    }
    y
}

fn draw_terms_row(buf: &mut Buffer, app: &App, theme: &Theme, y: u16) -> u16 {
    let focused = app.focus() == FocusTarget::Field(Field::Terms);
    let shaking = app.is_shaking(Field::Terms);
    let x = 2 + u16::from(shaking);

    let mark = if app.terms_accepted() { "[x]" } else { "[ ]" };
    let mark_style = if focused {
        TextStyle::new(theme.primary, theme.background).bold()
    } else {
        TextStyle::new(theme.border, theme.background)
    };
    let col = buf.set_string(x, y, mark, mark_style);

    let label_style = if shaking {
        TextStyle::new(theme.error, theme.background)
    } else {
        TextStyle::new(theme.text, theme.background)
    };
    buf.set_string(col + 1, y, "I accept the Terms & Conditions", label_style);
    y + 1
}

fn draw_buttons(buf: &mut Buffer, app: &App, theme: &Theme, y: u16) -> u16 {
    let idle = TextStyle::new(theme.text, theme.surface);
    let active = TextStyle::new(theme.background, theme.primary).bold();

    let submit = if app.focus() == FocusTarget::Submit { active } else { idle };
    let clear = if app.focus() == FocusTarget::Clear { active } else { idle };
    let col = buf.set_string(2, y, " Submit ", submit);
    buf.set_string(col + 2, y, " Clear ", clear);
    y + 1
}

fn draw_footer(buf: &mut Buffer, theme: &Theme, y: u16) {
    let muted = TextStyle::new(theme.muted, theme.background);
    buf.set_string(
        2,
        y,
        "Tab next field  Space toggle  Ctrl+S submit  Ctrl+R clear  Esc quit",
        muted,
    );
    buf.set_string(
        2,
        y + 2,
        "Try: test123 / test@example.com / TestPass123 / 0812345678",
        muted,
    );
    buf.set_string(
        2,
        y + 3,
        "Bio: <script>alert(\"XSS\")</script> shows the sanitizer at work",
        muted,
    );
}

/// The live validation summary and the sanitization preview.
fn draw_panels(buf: &mut Buffer, app: &App, theme: &Theme, x: u16) {
    let header = TextStyle::new(theme.primary, theme.background).bold();
    let muted = TextStyle::new(theme.muted, theme.background);
    let text = TextStyle::new(theme.text, theme.background);

    let mut y = 1;
    buf.set_string(x, y, "Field Validation Status", header);
    y += 1;
    if app.report().is_empty() {
        buf.set_string(x, y, "Fill out the form to see validation results...", muted);
        y += 1;
    } else {
        for entry in app.report().entries() {
            let col = buf.set_string(x, y, entry.field.label(), text);
            let col = buf.set_string(col, y, ": ", muted);
            if entry.valid {
                buf.set_string(col, y, "Valid", TextStyle::new(theme.success, theme.background));
            } else {
                buf.set_string(col, y, "Invalid", TextStyle::new(theme.error, theme.background));
            }
            y += 1;
        }
    }

    y += 1;
    buf.set_string(x, y, "Sanitization Preview", header);
    y += 1;
    let bio = app.text(Field::Bio);
    if !app.bio_touched() {
        buf.set_string(
            x,
            y,
            "Enter HTML in the bio field to see sanitization in action...",
            muted,
        );
    } else {
        match sanitize_preview(bio) {
            Some(sanitized) => {
                buf.set_string(x, y, "Original:", muted);
                buf.set_string(x + 11, y, bio, text);
                buf.set_string(x, y + 1, "Sanitized:", muted);
                buf.set_string(
                    x + 11,
                    y + 1,
                    &sanitized,
                    TextStyle::new(theme.success, theme.background),
                );
            }
            None => {
                buf.set_string(
                    x,
                    y,
                    "No HTML detected",
                    TextStyle::new(theme.success, theme.background),
                );
                buf.set_string(x, y + 1, "Your input is clean and safe.", muted);
            }
        }
    }
}

/// Banners stack from the top-right corner, drawn over everything else.
fn draw_banners(buf: &mut Buffer, app: &App, theme: &Theme, width: u16) {
    if width < 10 {
        return;
    }
    let mut y = 1;
    for (_, banner) in app.banners() {
        let accent = match banner.level {
            BannerLevel::Success => theme.success,
            BannerLevel::Error => theme.error,
        };
        let body_lines: Vec<&str> = banner
            .body
            .as_deref()
            .map(|body| body.lines().collect())
            .unwrap_or_default();
        let content_width = std::iter::once(banner.title.as_str())
            .chain(body_lines.iter().copied())
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0) as u16;
        let box_w = (content_width + 4).min(width.saturating_sub(4));
        let box_h = body_lines.len() as u16 + 3;
        let x = width.saturating_sub(box_w + 2);

        draw_box(buf, x, y, box_w, box_h, accent, theme);
        set_clipped(
            buf,
            x + 2,
            y + 1,
            x + box_w - 2,
            &banner.title,
            TextStyle::new(accent, theme.surface).bold(),
        );
        for (i, line) in body_lines.iter().enumerate() {
            set_clipped(
                buf,
                x + 2,
                y + 2 + i as u16,
                x + box_w - 2,
                line,
                TextStyle::new(theme.text, theme.surface),
            );
        }
        y += box_h + 1;
    }
}

fn draw_box(buf: &mut Buffer, x: u16, y: u16, w: u16, h: u16, accent: Color, theme: &Theme) {
    if w < 2 || h < 2 {
        return;
    }
    buf.fill(x, y, w, h, theme.surface);
    let style = TextStyle::new(accent, theme.surface);
    let horizontal = "─".repeat((w - 2) as usize);
    buf.set_string(x + 1, y, &horizontal, style);
    buf.set_string(x + 1, y + h - 1, &horizontal, style);
    buf.set_string(x, y, "╭", style);
    buf.set_string(x + w - 1, y, "╮", style);
    buf.set_string(x, y + h - 1, "╰", style);
    buf.set_string(x + w - 1, y + h - 1, "╯", style);
    for cy in y + 1..y + h - 1 {
        buf.set_string(x, cy, "│", style);
        buf.set_string(x + w - 1, cy, "│", style);
    }
}

/// Like [`Buffer::set_string`] but stops before the given column.
fn set_clipped(buf: &mut Buffer, x: u16, y: u16, limit: u16, text: &str, style: TextStyle) -> u16 {
    let mut col = x;
    let mut tmp = [0u8; 4];
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if col + w > limit {
            break;
        }
        col = buf.set_string(col, y, ch.encode_utf8(&mut tmp), style);
    }
    col
}
