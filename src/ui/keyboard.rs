//! Transport-neutral button layouts. Adapters render these into their own widgets.
use crate::constants::{MAX_BUTTONS_PER_ROW, MAX_ROWS};
use crate::flow::pagination::paginate;
use crate::interactions::ids::{CallbackToken, DnsTool, InfoAction, MenuTarget, page_token};
use crate::templates::{Category, Parameter, Template, populated_categories, templates_in};

const CATEGORY_ROW: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    Primary,
    #[default]
    Secondary,
    Success,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub token: String,
    pub style: ButtonStyle,
    pub disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
            style: ButtonStyle::default(),
            disabled: false,
        }
    }

    fn of(label: impl Into<String>, token: &CallbackToken) -> Self {
        Self::new(label, token.encode())
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, row: Vec<Button>) -> Self {
        if !row.is_empty() {
            self.rows.push(row);
        }
        self
    }

    /// Every button token in layout order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(|b| b.token.as_str())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }

    /// Enforce the transport's layout limits, keeping the last row (navigation) intact.
    pub fn clamped(mut self) -> Self {
        for row in &mut self.rows {
            row.truncate(MAX_BUTTONS_PER_ROW);
        }
        if self.rows.len() > MAX_ROWS
            && let Some(last) = self.rows.pop()
        {
            self.rows.truncate(MAX_ROWS - 1);
            self.rows.push(last);
        }
        self
    }
}

fn back_to_main_button() -> Button {
    Button::of("🔙 Main Menu", &CallbackToken::Menu(MenuTarget::Main))
}

pub fn main_menu() -> Keyboard {
    let menu = |label: &str, target| Button::of(label, &CallbackToken::Menu(target));
    let cmd = |label: &str, action| Button::of(label, &CallbackToken::Cmd(action));
    Keyboard::new()
        .row(vec![
            menu("🔍 Quick Search", MenuTarget::Templates).style(ButtonStyle::Primary),
            menu("📡 Host Lookup", MenuTarget::Host),
            menu("📋 DNS Tools", MenuTarget::Dns),
        ])
        .row(vec![
            menu("💥 Exploits", MenuTarget::Exploits),
            menu("🛡️ Vuln Search", MenuTarget::Vuln),
            menu("📊 Count Query", MenuTarget::Count),
        ])
        .row(vec![menu("⚙️ Raw Query", MenuTarget::Raw)])
        .row(vec![
            cmd("ℹ️ Account Info", InfoAction::Account),
            cmd("📖 Filter Reference", InfoAction::Filters),
            cmd("❓ Help", InfoAction::Help),
        ])
}

/// Categories that hold templates, packed three per row, with counts.
pub fn categories() -> Keyboard {
    let buttons: Vec<Button> = populated_categories()
        .into_iter()
        .map(|(c, n)| {
            Button::of(
                format!("{} {} ({n})", c.emoji(), c.name()),
                &CallbackToken::Category(c),
            )
        })
        .collect();
    let mut kb = Keyboard::new();
    for row in buttons.chunks(CATEGORY_ROW) {
        kb = kb.row(row.to_vec());
    }
    kb.row(vec![back_to_main_button()])
}

fn template_rows(templates: Vec<&'static Template>) -> Keyboard {
    let buttons: Vec<Button> = templates
        .into_iter()
        .map(|t| {
            Button::of(
                format!("{} {}", t.emoji, t.name),
                &CallbackToken::Template(t.id.to_string()),
            )
        })
        .collect();
    let mut kb = Keyboard::new();
    for row in buttons.chunks(MAX_BUTTONS_PER_ROW) {
        kb = kb.row(row.to_vec());
    }
    kb
}

pub fn templates_in_category(category: Category) -> Keyboard {
    template_rows(templates_in(category))
        .row(vec![Button::of(
            "🔙 Categories",
            &CallbackToken::Menu(MenuTarget::Templates),
        )])
        .clamped()
}

/// Keyword hits, then a way back to the category list.
pub fn template_matches(templates: Vec<&'static Template>) -> Keyboard {
    template_rows(templates)
        .row(vec![Button::of(
            "📂 All Categories",
            &CallbackToken::Menu(MenuTarget::Templates),
        )])
        .clamped()
}

pub fn vuln_templates() -> Keyboard {
    template_rows(templates_in(Category::Vuln))
        .row(vec![back_to_main_button()])
        .clamped()
}

pub fn template_detail(template: &Template) -> Keyboard {
    Keyboard::new()
        .row(vec![
            Button::of("✏️ Use Template", &CallbackToken::Use(template.id.to_string()))
                .style(ButtonStyle::Primary),
            Button::of(
                "⚡ Run Example",
                &CallbackToken::Example(template.id.to_string()),
            )
            .style(ButtonStyle::Success),
        ])
        .row(vec![Button::of(
            "🔙 Back",
            &CallbackToken::Category(template.category),
        )])
}

/// Prev / page label / next, followed by a main-menu row.
pub fn pagination(query: &str, current: u32, total: u64, page_size: u32) -> Keyboard {
    let pager = paginate(total, page_size, current);
    let mut nav = Vec::with_capacity(3);
    if let Some(prev) = pager.prev {
        nav.push(Button::new("⬅️ Prev", page_token(prev, query)));
    }
    nav.push(
        Button::of(
            format!("📄 {}/{}", pager.current, pager.total_pages),
            &CallbackToken::Noop,
        )
        .disabled(),
    );
    if let Some(next) = pager.next {
        nav.push(Button::new("➡️ Next", page_token(next, query)).style(ButtonStyle::Primary));
    }
    Keyboard::new().row(nav).row(vec![back_to_main_button()])
}

pub fn back_to_main() -> Keyboard {
    Keyboard::new().row(vec![back_to_main_button()])
}

pub fn dns_menu() -> Keyboard {
    let tool = |label: &str, t| Button::of(label, &CallbackToken::Dns(t));
    Keyboard::new()
        .row(vec![
            tool("🔍 DNS Resolve", DnsTool::Resolve),
            tool("🔄 Reverse DNS", DnsTool::Reverse),
            tool("🌐 Domain Info", DnsTool::Domain),
        ])
        .row(vec![back_to_main_button()])
}

pub fn confirm_scan(target: &str) -> Keyboard {
    Keyboard::new().row(vec![
        Button::of("✅ Yes, scan", &CallbackToken::DoScan(target.to_string()))
            .style(ButtonStyle::Danger),
        Button::of("❌ Cancel", &CallbackToken::Menu(MenuTarget::Main)),
    ])
}

/// Default-value shortcut for the awaited parameter plus a cancel button.
pub fn param_prompt(param: &Parameter) -> Keyboard {
    Keyboard::new()
        .row(vec![
            Button::of(
                format!("💡 Use default: {}", param.example),
                &CallbackToken::Default {
                    param: param.name.to_string(),
                    value: param.example.to_string(),
                },
            )
            .style(ButtonStyle::Success),
        ])
        .row(vec![
            Button::of("❌ Cancel", &CallbackToken::Menu(MenuTarget::Main))
                .style(ButtonStyle::Danger),
        ])
}
