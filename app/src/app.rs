use anyhow::{Context, Result};
use eframe::egui::{self, TextureHandle};
use pokegui_client::{Client, ClientConfig, CreatureRecord};
use pokegui_team::{
    Completion, GRID_COLUMNS, GRID_ROWS, SlotId, SlotTicket, TEAM_SIZE, Team, parse_level,
    parse_name,
};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::panel::{self, PanelView, QueryForm};
use crate::sprite;
use crate::theme::Theme;

/// Gap around each panel
const CELL_PADDING: f32 = 5.0;

/// A background lookup reporting back to the UI thread
struct Finished {
    ticket: SlotTicket,
    record: Option<CreatureRecord>,
}

pub struct TeamApp {
    runtime: Runtime,
    client: Client,
    team: Team,
    forms: [QueryForm; TEAM_SIZE],
    sprites: [Option<TextureHandle>; TEAM_SIZE],
    theme: Theme,
    finished_tx: mpsc::UnboundedSender<Finished>,
    finished_rx: mpsc::UnboundedReceiver<Finished>,
}

impl TeamApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        let client = Client::new(ClientConfig::default())?;

        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        let (finished_tx, finished_rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            client,
            team: Team::new(),
            forms: Default::default(),
            sprites: Default::default(),
            theme,
            finished_tx,
            finished_rx,
        })
    }

    /// Start a lookup for `slot` from its form contents
    fn submit(&mut self, slot: SlotId, ctx: &egui::Context) {
        let form = &self.forms[slot.index()];
        let Some(name) = parse_name(&form.name) else {
            return;
        };
        let level = parse_level(&form.level);

        let ticket = self.team.begin_query(slot);
        tracing::debug!(
            slot = %slot,
            name = %name,
            level,
            generation = ticket.generation,
            "Lookup issued"
        );

        let client = self.client.clone();
        let tx = self.finished_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let record = client.lookup(&name, level).await;
            // The receiver lives as long as the app
            let _ = tx.send(Finished { ticket, record });
            ctx.request_repaint();
        });
    }

    /// Apply every lookup that finished since the last frame
    fn drain_finished(&mut self, ctx: &egui::Context) {
        while let Ok(Finished { ticket, record }) = self.finished_rx.try_recv() {
            let slot = ticket.slot;

            match self.team.complete(ticket, record) {
                Completion::Applied => {
                    self.sprites[slot.index()] = self
                        .team
                        .record(slot)
                        .and_then(|record| sprite::load(ctx, slot, record));
                }
                Completion::Failed => {
                    tracing::debug!(slot = %slot, "Lookup returned no data; keeping panel");
                }
                Completion::Stale => {}
            }
        }
    }
}

impl eframe::App for TeamApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_finished(ctx);

        let mut submitted = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            let area = ui.available_rect_before_wrap();
            let cell = egui::vec2(
                area.width() / GRID_COLUMNS as f32,
                area.height() / GRID_ROWS as f32,
            );

            for slot in SlotId::ALL {
                let min = area.min
                    + egui::vec2(cell.x * slot.column() as f32, cell.y * slot.row() as f32);
                let rect = egui::Rect::from_min_size(min, cell).shrink(CELL_PADDING);

                ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), |ui| {
                    let view = PanelView {
                        slot,
                        form: &mut self.forms[slot.index()],
                        state: self.team.slot(slot),
                        sprite: self.sprites[slot.index()].as_ref(),
                        theme: &self.theme,
                    };
                    if panel::show(ui, view) {
                        submitted.push(slot);
                    }
                });
            }
        });

        for slot in submitted {
            self.submit(slot, ctx);
        }
    }
}
