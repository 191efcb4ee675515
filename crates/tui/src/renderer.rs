use folio_protocol::{
    CareerCard, IconKind, LevelBadge, PaintCommand, ProjectCard, TerminalFrame, ThemeToken,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Tabs, Wrap},
};

use crate::rain::MatrixRain;

const CURSOR: &str = "▋";
const KEY_HINTS: &str = " 1-4 tabs · l lang · n/N focus · ⏎ open · r rain · q quit ";

pub fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Rgb(3, 7, 18),
        ThemeToken::Surface => Color::Rgb(17, 24, 39),
        ThemeToken::Border => Color::Rgb(55, 65, 81),
        ThemeToken::TitleText => Color::Gray,
        ThemeToken::SectionTitle => Color::LightGreen,
        ThemeToken::TabActive => Color::LightGreen,
        ThemeToken::TabInactive => Color::DarkGray,
        ThemeToken::PromptSymbol => Color::Gray,
        ThemeToken::CommandText => Color::LightGreen,
        ThemeToken::CommandArg => Color::LightCyan,
        ThemeToken::Cursor => Color::White,
        ThemeToken::TextPrimary => Color::Rgb(209, 213, 219),
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::Link => Color::White,
        ThemeToken::TreeGuide => Color::DarkGray,
        ThemeToken::CategoryName => Color::LightCyan,
        ThemeToken::SkillName => Color::LightGreen,
        ThemeToken::SkillUnused => Color::DarkGray,
        ThemeToken::LevelDaily => Color::LightRed,
        ThemeToken::LevelRegular => Color::LightBlue,
        ThemeToken::LevelLearning => Color::LightYellow,
        ThemeToken::Strength => Color::Rgb(251, 191, 36),
        ThemeToken::TimelineActive => Color::LightGreen,
        ThemeToken::TimelineInactive => Color::DarkGray,
        ThemeToken::CareerBullet => Color::LightYellow,
        ThemeToken::CareerPeriod => Color::DarkGray,
        ThemeToken::CareerCurrent => Color::LightGreen,
        ThemeToken::Company => Color::Rgb(134, 239, 172),
        ThemeToken::Position => Color::LightCyan,
        ThemeToken::AchievementMarker => Color::Rgb(251, 191, 36),
        ThemeToken::TechBadge => Color::Rgb(134, 239, 172),
        ThemeToken::ProjectName => Color::LightCyan,
        ThemeToken::ProjectLink => Color::Gray,
        ThemeToken::SocialGithub => Color::White,
        ThemeToken::SocialLinkedin => Color::Rgb(96, 165, 250),
        ThemeToken::SocialX => Color::Rgb(229, 231, 235),
        ThemeToken::RainHead => Color::Rgb(34, 197, 94),
        ThemeToken::RainTrail => Color::Rgb(20, 83, 45),
    }
}

fn fg(token: ThemeToken) -> Style {
    Style::default().fg(theme_to_color(token))
}

fn badge_token(badge: LevelBadge) -> ThemeToken {
    match badge {
        LevelBadge::Daily => ThemeToken::LevelDaily,
        LevelBadge::Regular => ThemeToken::LevelRegular,
        LevelBadge::Learning => ThemeToken::LevelLearning,
    }
}

fn icon_label(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Github => "GH",
        IconKind::Linkedin => "in",
        IconKind::X => "X ",
    }
}

/// Per-frame view state owned by the app.
pub struct View<'a> {
    pub frame: Option<&'a TerminalFrame>,
    pub scroll: u16,
    /// Keep the newest output in view.
    pub follow: bool,
    pub focus: Option<usize>,
    pub rain: Option<&'a MatrixRain>,
}

/// Draw one frame. Returns the scroll offset actually used, after
/// following and clamping.
pub fn draw(f: &mut Frame, view: &View<'_>) -> u16 {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme_to_color(ThemeToken::Background))), area);
    if let Some(rain) = view.rain {
        draw_rain(f, rain, area);
    }

    let [title_area, window_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);
    let window_area = window_area.inner(Margin::new(2, 0));
    f.render_widget(Clear, window_area);

    let Some(frame) = view.frame else {
        f.render_widget(window_block(None), window_area);
        return 0;
    };

    f.render_widget(
        Paragraph::new(Line::from(frame.section_title.as_str()).centered())
            .style(fg(ThemeToken::SectionTitle).add_modifier(Modifier::BOLD)),
        title_area,
    );

    let block = window_block(Some(frame));
    let inner = block.inner(window_area);
    f.render_widget(block, window_area);

    let [tabs_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
    let titles: Vec<Line> = frame.tabs.iter().map(|t| Line::from(t.label.as_str())).collect();
    let selected = frame.tabs.iter().position(|t| t.active).unwrap_or(0);
    f.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(fg(ThemeToken::TabInactive))
            .highlight_style(fg(ThemeToken::TabActive).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
            .divider(" "),
        tabs_area,
    );

    let lines = body_lines(&frame.body, view.focus);
    let body_area = body_area.inner(Margin::new(1, 0));
    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    let max_scroll = wrapped_rows(&body, body_area.width).saturating_sub(body_area.height);
    let scroll = if view.follow {
        max_scroll
    } else {
        view.scroll.min(max_scroll)
    };
    f.render_widget(body.scroll((scroll, 0)), body_area);
    scroll
}

fn window_block(frame: Option<&TerminalFrame>) -> Block<'static> {
    let mut block = Block::bordered()
        .border_style(fg(ThemeToken::Border))
        .style(Style::default().bg(theme_to_color(ThemeToken::Surface)))
        .title_bottom(Line::from(KEY_HINTS).style(fg(ThemeToken::TextMuted)).centered());
    if let Some(frame) = frame {
        block = block
            .title(Line::from(vec![
                Span::styled(" ● ", Style::default().fg(Color::Red)),
                Span::styled("● ", Style::default().fg(Color::Yellow)),
                Span::styled("● ", Style::default().fg(Color::Green)),
                Span::styled(format!("{} ", frame.window_title), fg(ThemeToken::TitleText)),
            ]))
            .title_top(
                Line::from(format!(" [{}] ", frame.locale))
                    .style(fg(ThemeToken::TextSecondary))
                    .right_aligned(),
            );
    }
    block
}

fn draw_rain(f: &mut Frame, rain: &MatrixRain, area: Rect) {
    let buf = f.buffer_mut();
    for cell in rain.cells() {
        let (x, y) = (area.x + cell.x, area.y + cell.y);
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        let token = if cell.head {
            ThemeToken::RainHead
        } else {
            ThemeToken::RainTrail
        };
        buf[(x, y)]
            .set_char(cell.glyph)
            .set_fg(theme_to_color(token));
    }
}

/// Rows the lines occupy once wrapped at `width`.
fn wrapped_rows(body: &Paragraph<'_>, width: u16) -> u16 {
    u16::try_from(body.line_count(width.max(1))).unwrap_or(u16::MAX)
}

/// Lay out a paint stream as terminal lines. `focus` indexes the
/// interactive commands (tab links and revealed career cards) in stream
/// order.
pub fn body_lines(body: &[PaintCommand], focus: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut interactive = 0usize;
    let mut next_focus = || {
        let focused = focus == Some(interactive);
        interactive += 1;
        focused
    };

    for cmd in body {
        match cmd {
            PaintCommand::Command {
                command,
                arg,
                cursor,
            } => {
                let mut spans = vec![
                    Span::styled("$ ", fg(ThemeToken::PromptSymbol)),
                    Span::styled(command.clone(), fg(ThemeToken::CommandText)),
                ];
                if let Some(arg) = arg {
                    spans.push(Span::styled(format!(" {arg}"), fg(ThemeToken::CommandArg)));
                }
                if *cursor {
                    spans.push(Span::styled(CURSOR, fg(ThemeToken::Cursor)));
                }
                lines.push(Line::from(spans));
            }
            PaintCommand::Text { text, color } => {
                lines.extend(text.split('\n').map(|t| Line::styled(t.to_string(), fg(*color))));
            }
            PaintCommand::TabLink { label, .. } => {
                let mut style = fg(ThemeToken::Link).add_modifier(Modifier::UNDERLINED);
                if next_focus() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                lines.push(Line::from(Span::styled(label.clone(), style)));
            }
            PaintCommand::TreeRow {
                guides,
                label,
                color,
                badge,
                note,
                strength,
            } => {
                let guide: String = guides.iter().map(|g| g.glyph()).collect();
                let mut spans = vec![
                    Span::styled(guide, fg(ThemeToken::TreeGuide)),
                    Span::styled(label.clone(), fg(*color)),
                ];
                if let Some(badge) = badge {
                    spans.push(Span::styled(format!(" [{}]", badge.label()), fg(badge_token(*badge))));
                }
                if let Some(note) = note {
                    spans.push(Span::styled(format!(" ({note})"), fg(ThemeToken::TextMuted)));
                }
                if *strength {
                    spans.push(Span::styled(" ★", fg(ThemeToken::Strength)));
                }
                lines.push(Line::from(spans));
            }
            PaintCommand::Career(card) => {
                let focused = card.interactive && next_focus();
                career_lines(&mut lines, card, focused);
            }
            PaintCommand::Project(card) => project_lines(&mut lines, card),
            PaintCommand::Social {
                name,
                href,
                icon,
                color,
            } => lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", icon_label(*icon)), fg(*color)),
                Span::styled(format!("{name}  "), fg(*color).add_modifier(Modifier::BOLD)),
                Span::styled(href.clone(), fg(ThemeToken::TextMuted)),
            ])),
            PaintCommand::Prompt => lines.push(Line::from(vec![
                Span::styled("$ ", fg(ThemeToken::PromptSymbol)),
                Span::styled(CURSOR, fg(ThemeToken::Cursor).add_modifier(Modifier::SLOW_BLINK)),
            ])),
            PaintCommand::Spacer => lines.push(Line::default()),
        }
    }
    lines
}

fn career_lines(lines: &mut Vec<Line<'static>>, card: &CareerCard, focused: bool) {
    let (rail, bullet) = if card.current {
        (ThemeToken::TimelineActive, "● ")
    } else {
        (ThemeToken::TimelineInactive, "○ ")
    };
    let rail_span = || Span::styled("│   ", fg(rail));

    let mut header = vec![
        Span::styled(bullet, fg(rail)),
        Span::styled("* ", fg(ThemeToken::CareerBullet)),
        Span::styled(card.period.clone(), fg(ThemeToken::CareerPeriod)),
    ];
    if card.current {
        header.push(Span::styled(" CURRENT", fg(ThemeToken::CareerCurrent).add_modifier(Modifier::BOLD)));
    }
    if card.interactive {
        header.push(Span::styled(
            if card.expanded { " [-]" } else { " [+]" },
            fg(ThemeToken::TextMuted),
        ));
    }
    let mut header = Line::from(header);
    if focused {
        header = header.patch_style(Style::default().add_modifier(Modifier::REVERSED));
    }
    lines.push(header);

    lines.push(Line::from(vec![
        rail_span(),
        Span::styled(card.company.clone(), fg(ThemeToken::Company).add_modifier(Modifier::BOLD)),
        Span::styled(" | ", fg(ThemeToken::TextMuted)),
        Span::styled(card.position.clone(), fg(ThemeToken::Position)),
    ]));
    if !card.description.is_empty() {
        lines.push(Line::from(vec![
            rail_span(),
            Span::styled(card.description.clone(), fg(ThemeToken::TextSecondary)),
        ]));
    }

    if let Some(details) = &card.details {
        let indent = |mut spans: Vec<Span<'static>>| {
            spans.insert(0, rail_span());
            spans.insert(1, Span::styled("  ", Style::default()));
            Line::from(spans)
        };
        lines.push(indent(vec![
            Span::styled("$ ", fg(ThemeToken::PromptSymbol)),
            Span::styled("cat ", fg(ThemeToken::CommandText)),
            Span::styled(details.readme.clone(), fg(ThemeToken::CommandArg)),
        ]));
        if let Some(placeholder) = &details.placeholder {
            lines.push(indent(vec![Span::styled(placeholder.clone(), fg(ThemeToken::TextMuted))]));
        } else {
            let sections = [
                (&details.responsibilities_heading, &details.responsibilities, "-", ThemeToken::TextMuted),
                (&details.achievements_heading, &details.achievements, "+", ThemeToken::AchievementMarker),
            ];
            for (heading, items, marker, marker_color) in sections {
                if items.is_empty() {
                    continue;
                }
                lines.push(indent(vec![Span::styled(format!("## {heading}"), fg(ThemeToken::TextMuted))]));
                for item in items {
                    lines.push(indent(vec![
                        Span::styled(format!("{marker} "), fg(marker_color)),
                        Span::styled(item.clone(), fg(ThemeToken::SkillName)),
                    ]));
                }
            }
            if !details.technologies.is_empty() {
                lines.push(indent(vec![
                    Span::styled("$ ", fg(ThemeToken::PromptSymbol)),
                    Span::styled("echo ", fg(ThemeToken::CommandText)),
                    Span::styled("$TECH_STACK ", fg(ThemeToken::CommandArg)),
                    Span::styled("| tr ',' '\\n'", fg(ThemeToken::TextPrimary)),
                ]));
                lines.push(indent(tech_badges(&details.technologies)));
            }
        }
    }
    lines.push(Line::from(rail_span()));
}

fn project_lines(lines: &mut Vec<Line<'static>>, card: &ProjectCard) {
    let mut header = vec![Span::styled(
        card.name.clone(),
        fg(ThemeToken::ProjectName).add_modifier(Modifier::BOLD),
    )];
    if let Some(url) = &card.github_url {
        header.push(Span::styled(format!("  [GitHub] {url}"), fg(ThemeToken::ProjectLink)));
    }
    if let Some(url) = &card.live_url {
        header.push(Span::styled(format!("  [Live] {url}"), fg(ThemeToken::ProjectLink)));
    }
    lines.push(Line::from(header));
    lines.push(Line::styled(card.description.clone(), fg(ThemeToken::TextSecondary)));
    if !card.technologies.is_empty() {
        lines.push(Line::from(tech_badges(&card.technologies)));
    }
}

fn tech_badges(technologies: &[String]) -> Vec<Span<'static>> {
    technologies
        .iter()
        .map(|tech| Span::styled(format!("[{tech}] "), fg(ThemeToken::TechBadge)))
        .collect()
}
