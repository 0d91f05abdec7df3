use crate::controller::ChatController;
use crate::conversation::{Message, Sender};
use crate::theme::Theme;
use eframe::egui::{self, Align, Layout, Margin, RichText, ScrollArea};
use std::time::Duration;

const PENDING_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChatApp {
    controller: ChatController,
    title: String,
    theme: Theme,
    visuals_dirty: bool,
    rendered_messages: usize,
    refocus_input: bool,
}

impl ChatApp {
    pub fn new(controller: ChatController, title: String) -> Self {
        Self {
            controller,
            title,
            theme: Theme::default(),
            visuals_dirty: true,
            rendered_messages: 0,
            refocus_input: false,
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.visuals_dirty = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let mut toggle = false;
        egui::TopBottomPanel::top("header")
            .show_separator_line(false)
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(Margin::same(16)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&self.title).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        toggle = ui
                            .button(self.theme.mode.toggle_icon())
                            .on_hover_text("Toggle dark mode")
                            .clicked();
                    });
                });
            });

        if toggle {
            self.toggle_theme();
        }
    }

    fn render_composer(&mut self, ctx: &egui::Context) {
        let pending = self.controller.is_pending();
        let mut send_now = false;

        egui::TopBottomPanel::bottom("composer")
            .show_separator_line(false)
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(Margin::same(16)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let button_width = 72.0;
                    let input_width = (ui.available_width() - button_width - 8.0).max(120.0);
                    self.theme.composer_frame().show(ui, |ui| {
                        let mut draft = self.controller.draft().to_string();
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut draft)
                                .desired_width(input_width - 16.0)
                                .frame(false)
                                .hint_text("Type your message..."),
                        );
                        if response.changed() {
                            self.controller.set_draft(draft);
                        }
                        if self.refocus_input {
                            response.request_focus();
                            self.refocus_input = false;
                        }
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            send_now = true;
                            self.refocus_input = true;
                        }
                    });

                    let send_label = RichText::new("Send").color(self.theme.text_on_accent);
                    let clicked = ui
                        .add_enabled(
                            !pending,
                            egui::Button::new(send_label)
                                .fill(self.theme.user_bubble)
                                .min_size(egui::vec2(button_width, 34.0)),
                        )
                        .clicked();
                    send_now |= clicked;
                });

                if let Some(error) = self.controller.last_error() {
                    ui.label(
                        RichText::new(format!("Message not delivered: {error}"))
                            .small()
                            .color(self.theme.danger),
                    );
                }

                egui::CollapsingHeader::new("Diagnostics")
                    .default_open(false)
                    .show(ui, |ui| {
                        ScrollArea::vertical()
                            .id_salt("diagnostics_log")
                            .max_height(90.0)
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for entry in self.controller.diagnostics() {
                                    ui.label(RichText::new(entry).small().monospace());
                                }
                            });
                    });
            });

        if send_now && self.controller.submit() {
            ctx.request_repaint();
        }
    }

    fn render_transcript(&mut self, ctx: &egui::Context) {
        let message_count = self.controller.messages().len();
        let scroll_to_bottom = message_count != self.rendered_messages;
        let pending = self.controller.is_pending();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(Margin::same(16)))
            .show(ctx, |ui| {
                self.theme.card_frame().show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    ScrollArea::vertical()
                        .id_salt("chat_transcript")
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for message in self.controller.messages() {
                                render_message(ui, &self.theme, message);
                            }

                            if pending {
                                render_typing_indicator(ui, &self.theme);
                            }

                            if scroll_to_bottom {
                                ui.scroll_to_cursor(Some(Align::BOTTOM));
                            }
                        });
                });
            });

        self.rendered_messages = message_count;
    }
}

fn render_message(ui: &mut egui::Ui, theme: &Theme, message: &Message) {
    let (layout, fill, text_color) = match message.sender() {
        Sender::User => (
            Layout::right_to_left(Align::TOP),
            theme.user_bubble,
            theme.text_on_accent,
        ),
        Sender::Bot => (
            Layout::left_to_right(Align::TOP),
            theme.bot_bubble,
            theme.text_primary,
        ),
    };
    let max_bubble_width = ui.available_width() * 0.7;

    ui.with_layout(layout, |ui| {
        theme.bubble_frame(fill).show(ui, |ui| {
            ui.set_max_width(max_bubble_width);
            ui.vertical(|ui| {
                ui.label(RichText::new(message.text()).color(text_color));
                ui.label(
                    RichText::new(message.timestamp())
                        .small()
                        .color(text_color.gamma_multiply(0.7)),
                );
            });
        });
    });
    ui.add_space(theme.spacing_8);
}

fn render_typing_indicator(ui: &mut egui::Ui, theme: &Theme) {
    let time = ui.input(|i| i.time);
    ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
        theme.bubble_frame(theme.bot_bubble).show(ui, |ui| {
            ui.horizontal(|ui| {
                for dot in 0..3 {
                    let phase = (time * 6.0 - f64::from(dot)).sin() as f32;
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 14.0), egui::Sense::hover());
                    let center = rect.center() - egui::vec2(0.0, phase.max(0.0) * 3.0);
                    ui.painter().circle_filled(center, 4.0, theme.text_muted);
                }
            });
        });
    });
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.drain_events();

        if self.visuals_dirty {
            self.theme.apply_visuals(ctx);
            self.visuals_dirty = false;
        }

        self.render_header(ctx);
        self.render_composer(ctx);
        self.render_transcript(ctx);

        if self.controller.is_pending() {
            ctx.request_repaint_after(PENDING_POLL_INTERVAL);
        }
    }
}
