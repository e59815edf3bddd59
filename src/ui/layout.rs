use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;
pub const TABS_HEIGHT: u16 = 2;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    let tabs_height = body.height.min(TABS_HEIGHT);
    let tabs = Rect {
        height: tabs_height,
        ..body
    };
    let content = Rect {
        y: body.y + tabs_height,
        height: body.height - tabs_height,
        ..body
    };

    Regions {
        header,
        tabs,
        content,
        footer,
    }
}
