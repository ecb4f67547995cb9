//! N-Queens desktop application UI.
//!
//! # Design Notes
//! - Board of clickable cells; clicking toggles a queen through the game
//!   engine, which enforces the queen budget.
//! - Conflicting queens are highlighted red; the verdict banner only
//!   appears once the board holds N queens.
//! - Sidebar controls: board-size slider (4-12), Solve/Reset/Undo, and a
//!   light/dark theme toggle. Undo is disabled while no history exists.

use eframe::{
    App, CreationContext, Frame,
    egui::{
        Button, CentralPanel, Color32, Context, Grid, RichText, Slider, Ui, Vec2, Visuals,
    },
};
use egui_extras::{Size, StripBuilder};
use nqueens_core::{BoardSize, Position, Validity};
use nqueens_game::Board;

const QUEEN_GLYPH: &str = "\u{265b}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoardTheme {
    Light,
    Dark,
}

impl BoardTheme {
    fn toggle(&mut self) {
        *self = match self {
            BoardTheme::Light => BoardTheme::Dark,
            BoardTheme::Dark => BoardTheme::Light,
        };
    }

    fn light_square(self) -> Color32 {
        match self {
            BoardTheme::Light => Color32::from_rgb(255, 235, 205),
            BoardTheme::Dark => Color32::from_rgb(209, 230, 185),
        }
    }

    fn dark_square(self) -> Color32 {
        match self {
            BoardTheme::Light => Color32::from_rgb(184, 139, 74),
            BoardTheme::Dark => Color32::from_rgb(139, 180, 97),
        }
    }

    fn queen_color(self) -> Color32 {
        match self {
            BoardTheme::Light => Color32::from_rgb(30, 30, 30),
            BoardTheme::Dark => Color32::from_rgb(20, 20, 20),
        }
    }

    fn visuals(self) -> Visuals {
        match self {
            BoardTheme::Light => Visuals::light(),
            BoardTheme::Dark => Visuals::dark(),
        }
    }
}

const CONFLICT_FILL: Color32 = Color32::from_rgb(220, 38, 38);

#[derive(Debug)]
pub struct QueensApp {
    board: Board,
    size_input: u8,
    theme: BoardTheme,
}

impl QueensApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let size = BoardSize::default();
        Self {
            board: Board::new(size),
            size_input: size.get(),
            theme: BoardTheme::Light,
        }
    }

    fn toggle_cell(&mut self, pos: Position) {
        match self.board.toggle(pos) {
            Ok(outcome) => log::debug!("toggled {pos}: {outcome:?}"),
            Err(err) => log::warn!("toggle rejected: {err}"),
        }
    }

    fn apply_size_input(&mut self) {
        if self.size_input == self.board.size().get() {
            return;
        }
        match BoardSize::try_new(self.size_input) {
            Ok(size) => {
                log::info!("board size changed to {size}");
                self.board.set_size(size);
            }
            Err(err) => {
                // Slider range matches the supported range; keep the
                // engine precondition honest anyway
                log::warn!("ignored size change: {err}");
                self.size_input = self.board.size().get();
            }
        }
    }
}

impl App for QueensApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.set_visuals(self.theme.visuals());

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::relative(0.7))
                .size(Size::relative(0.3))
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        self.draw_board(ui);
                    });
                    strip.cell(|ui| {
                        self.draw_sidebar(ui);
                    });
                });
        });
    }
}

impl QueensApp {
    fn draw_board(&mut self, ui: &mut Ui) {
        let n = self.board.size().get();
        let report = self.board.conflicts();
        let board_px = ui.available_size().min_elem();
        let cell_size = board_px / f32::from(n);

        let mut clicked = None;
        Grid::new(ui.id().with("board"))
            .spacing((0.0, 0.0))
            .min_col_width(cell_size)
            .min_row_height(cell_size)
            .show(ui, |ui| {
                for row in 0..n {
                    for col in 0..n {
                        let pos = Position::new(row, col);
                        let text = if self.board.placement().contains(pos) {
                            RichText::new(QUEEN_GLYPH)
                                .size(cell_size * 0.7)
                                .color(self.theme.queen_color())
                        } else {
                            RichText::new("")
                        };

                        let fill = if report.conflicts().contains(pos) {
                            CONFLICT_FILL
                        } else if (row + col) % 2 == 0 {
                            self.theme.light_square()
                        } else {
                            self.theme.dark_square()
                        };

                        let button = Button::new(text)
                            .min_size(Vec2::splat(cell_size))
                            .fill(fill);
                        if ui.add(button).clicked() {
                            clicked = Some(pos);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(pos) = clicked {
            self.toggle_cell(pos);
        }
    }

    fn draw_sidebar(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("N-Queens").size(24.0).strong());
            ui.add_space(8.0);

            self.draw_status(ui);
            ui.add_space(12.0);
            ui.separator();

            let n = self.board.size().get();
            ui.label(format!("Board size & queens: {n}"));
            let slider = Slider::new(
                &mut self.size_input,
                BoardSize::MIN.get()..=BoardSize::MAX.get(),
            );
            if ui.add(slider).changed() {
                self.apply_size_input();
            }

            ui.add_space(12.0);
            if ui.button(RichText::new("Solve").size(16.0)).clicked() {
                if let Err(err) = self.board.solve() {
                    log::error!("solve failed: {err}");
                }
            }
            if ui.button(RichText::new("Reset").size(16.0)).clicked() {
                self.board.reset();
            }
            let undo = Button::new(RichText::new("Undo").size(16.0));
            if ui.add_enabled(self.board.can_undo(), undo).clicked() {
                let _ = self.board.undo();
            }
            if ui.button(RichText::new("Theme").size(16.0)).clicked() {
                self.theme.toggle();
            }
        });
    }

    fn draw_status(&self, ui: &mut Ui) {
        match self.board.validity() {
            Validity::Unknown => {
                let placed = self.board.placement().len();
                let target = self.board.size().queen_count();
                ui.label(format!("{placed} / {target} queens placed"));
            }
            Validity::Valid => {
                ui.label(
                    RichText::new("Valid solution!")
                        .size(18.0)
                        .color(Color32::from_rgb(22, 163, 74)),
                );
            }
            Validity::Invalid => {
                ui.label(
                    RichText::new("Invalid solution")
                        .size(18.0)
                        .color(CONFLICT_FILL),
                );
            }
        }
    }
}
