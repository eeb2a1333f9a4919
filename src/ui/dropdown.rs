use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 30.0;

/// Dropdown selector UI component.
/// Can be disabled while the simulation runs, since board size cannot
/// change on the fly.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    enabled: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            enabled: true,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Enable or disable interaction; disabling also closes the menu
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.is_open = false;
        }
    }

    /// Handle interaction and return true if the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !self.enabled || !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if self.is_open {
            self.is_open = false;
            if let Some(i) = self.hovered_item(mouse_pos) {
                let changed = self.selected != i;
                self.selected = i;
                return changed;
            }
        }

        false
    }

    /// Draw the dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if !self.enabled {
            Color::from_rgba(60, 60, 60, 255)
        } else if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        let text_color = if self.enabled { WHITE } else { GRAY };

        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, text_color);
        draw_text(
            &self.items[self.selected],
            self.x + 5.0,
            self.y + 21.0,
            16.0,
            text_color,
        );
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, text_color);

        if !self.is_open {
            return;
        }

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + ITEM_HEIGHT + i as f32 * ITEM_HEIGHT;
            let item_color = if self.hovered_item(mouse_pos) == Some(i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, item_color);
            draw_rectangle_lines(
                self.x,
                item_y,
                self.width,
                ITEM_HEIGHT,
                1.0,
                Color::from_rgba(80, 80, 80, 255),
            );
            draw_text(item, self.x + 5.0, item_y + 21.0, 16.0, WHITE);
        }

        draw_rectangle_lines(
            self.x,
            self.y + ITEM_HEIGHT,
            self.width,
            self.items.len() as f32 * ITEM_HEIGHT,
            2.0,
            WHITE,
        );
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + ITEM_HEIGHT
    }

    fn hovered_item(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        if mouse_pos.0 < self.x || mouse_pos.0 > self.x + self.width {
            return None;
        }
        let offset = mouse_pos.1 - (self.y + ITEM_HEIGHT);
        if offset < 0.0 {
            return None;
        }
        let index = (offset / ITEM_HEIGHT) as usize;
        (index < self.items.len()).then_some(index)
    }
}
