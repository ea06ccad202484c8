//! Main application for the Reversi GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{square_name, BoardView};
use super::game_state::{GameState, Screen};
use super::theme;
use crate::board::Piece;

/// Main Reversi application
pub struct ReversiApp {
    state: GameState,
    show_debug: bool,
}

impl Default for ReversiApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            show_debug: false,
        }
    }
}

impl ReversiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the intro screen with the difficulty picker
    fn render_intro(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(theme::INTRO_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.18);

                    ui.label(
                        RichText::new("REVERSI")
                            .size(64.0)
                            .strong()
                            .color(theme::INTRO_TEXT),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Human vs AI")
                            .size(22.0)
                            .color(theme::INTRO_TEXT),
                    );

                    ui.add_space(28.0);
                    for line in [
                        "You play Black and move first.",
                        "Click a highlighted square to outflank White's discs.",
                        "When neither side can move, the most discs wins.",
                    ] {
                        ui.label(RichText::new(line).size(15.0).color(theme::INTRO_TEXT));
                    }

                    ui.add_space(28.0);
                    ui.label(
                        RichText::new(format!("AI difficulty: {} plies", self.state.ai_depth))
                            .size(16.0)
                            .color(theme::INTRO_TEXT),
                    );
                    ui.add_space(4.0);
                    ui.add(
                        egui::Slider::new(&mut self.state.ai_depth, 1..=7)
                            .show_value(false),
                    );

                    ui.add_space(24.0);
                    let start = egui::Button::new(
                        RichText::new("START").size(22.0).strong().color(theme::TEXT_PRIMARY),
                    )
                    .fill(theme::INTRO_TEXT)
                    .corner_radius(CornerRadius::same(8));
                    if ui.add_sized(Vec2::new(220.0, 56.0), start).clicked() {
                        self.state.start_game();
                    }
                });
            });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Main Menu").clicked() {
                        self.state.to_intro();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.show_hints, "Move Hints (H)");
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: Black • AI depth {}", self.state.ai_depth));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(theme::PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                if self.show_debug {
                    self.render_debug_card(ui);
                    ui.add_space(10.0);
                }

                if self.state.screen == Screen::GameOver {
                    self.render_game_over_card(ui);
                    ui.add_space(10.0);
                }

                if let Some(msg) = self.state.message.clone() {
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(theme::CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new("REVERSI")
                    .size(22.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.game.to_move() == Piece::Black;
            let (disc_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let disc_color = if is_black {
                    theme::TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    disc_char,
                    egui::FontId::proportional(28.0),
                    disc_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(color_name)
                            .size(18.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        (
                            format!("AI thinking... {:.1}s", self.state.ai_thinking_elapsed()),
                            theme::STATUS_BUSY,
                        )
                    } else if self.state.screen == Screen::GameOver {
                        ("Game Over".to_string(), theme::STATUS_WIN)
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), theme::STATUS_OK)
                    } else {
                        ("AI's turn".to_string(), theme::STATUS_BUSY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render the disc-count card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(theme::TEXT_MUTED));
            ui.add_space(8.0);

            let (black, white) = self.state.counts();
            for (symbol, name, count, color) in [
                ("●", "Black (You)", black, egui::Color32::from_rgb(60, 60, 65)),
                ("○", "White (AI)", white, egui::Color32::from_rgb(200, 200, 205)),
            ] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(color));
                    ui.label(RichText::new(name).size(12.0).color(theme::TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(count.to_string())
                                .size(18.0)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(theme::TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Score: {}", result.score))
                                .size(11.0)
                                .strong()
                                .color(theme::STATUS_OK),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}ms", result.time_ms))
                                        .size(10.0)
                                        .color(theme::TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(format!("{} nodes", result.nodes))
                                        .size(10.0)
                                        .color(theme::TEXT_MUTED),
                                );
                            });
                        });
                    });

                    if let Some(pos) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("→ {}", square_name(pos)))
                                .size(12.0)
                                .strong()
                                .color(theme::STATUS_WIN),
                        );
                    }
                } else {
                    ui.label(
                        RichText::new("Waiting for AI...")
                            .size(10.0)
                            .color(theme::TEXT_MUTED),
                    );
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (black, white) = self.state.counts();
        let verdict = match self.state.winner() {
            Some(Piece::Black) => "HUMAN WINS!",
            Some(Piece::White) => "AI WINS!",
            _ => "IT'S A DRAW!",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    ui.label(
                        RichText::new(verdict)
                            .size(20.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Black {} - {} White", black, white))
                            .size(13.0)
                            .color(theme::TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);
                    let again = egui::Button::new(
                        RichText::new("PLAY AGAIN")
                            .size(14.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .fill(egui::Color32::from_rgb(60, 100, 70))
                    .corner_radius(CornerRadius::same(6));
                    if ui.add(again).clicked() {
                        self.state.new_game();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(theme::TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let interactive = self.state.is_human_turn();
            let hints = if interactive && self.state.show_hints {
                self.state.game.legal_moves()
            } else {
                Vec::new()
            };

            let clicked = BoardView::show(
                ui,
                self.state.game.board(),
                &hints,
                self.state.last_move,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_move(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::N) {
                self.state.new_game();
            }
            if i.key_pressed(egui::Key::H) {
                self.state.show_hints = !self.state.show_hints;
            }
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
        });
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.state.screen == Screen::Intro {
            self.render_intro(ctx);
            return;
        }

        self.handle_input(ctx);
        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
