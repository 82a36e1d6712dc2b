#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 폼마다 탭 하나를 둔다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use steam_property_estimator::{
    config::{self, Config},
    form::{FormFields, FormKind, OutputPanel},
    i18n::{self, keys, Language, Translator},
    logging,
};
use tracing::warn;

fn main() -> Result<(), eframe::Error> {
    logging::init("warn");
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!(%e, "using default config");
        Config::default()
    });
    let lang = i18n::resolve_language(cli_lang.as_deref(), Some(app_cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);
    let title = tr.t(keys::APP_TITLE).to_string();

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([560.0, 520.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            if tr.language() == Language::Ko {
                if let Err(e) = setup_fonts(&cc.egui_ctx) {
                    warn!("font setup: {e}");
                }
            }
            Box::new(GuiApp::new(&app_cfg, tr))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 라벨용 폰트를 찾아 기본 폰트 뒤에 대체 폰트로 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![PathBuf::from("assets/fonts/malgun.ttf")];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .map(PathBuf::from),
    );

    let path = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "Korean font not found; keeping default fonts.".to_string())?;
    let bytes =
        fs::read(path).map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;
    apply_font_bytes(ctx, bytes, "korean_font");
    Ok(())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(name.to_owned());
    }
    ctx.set_fonts(fonts);
}

/// 탭 하나의 입력/출력 상태.
struct FormTab {
    kind: FormKind,
    fields: FormFields,
    panel: OutputPanel,
}

impl FormTab {
    fn new(kind: FormKind, cfg: &Config) -> Self {
        let controller = kind.controller();
        let mut fields = FormFields::new();
        for field in controller.input_fields() {
            let default = match *field {
                "temp_unit" => cfg.default_units.temperature.symbol(),
                "pressure_unit" => cfg.default_units.pressure.symbol(),
                _ => "",
            };
            // 기본 단위가 이 폼의 표에 없으면 비워 둔다
            let default = if controller.unit_choices(field).contains(&default) {
                default
            } else {
                ""
            };
            fields.set(*field, default);
        }
        Self {
            kind,
            fields,
            panel: OutputPanel::for_form(controller),
        }
    }
}

struct GuiApp {
    tr: Translator,
    active: FormKind,
    tabs: Vec<FormTab>,
}

impl GuiApp {
    fn new(cfg: &Config, tr: Translator) -> Self {
        Self {
            tr,
            active: FormKind::SaturationByTemperature,
            tabs: FormKind::ALL
                .iter()
                .map(|kind| FormTab::new(*kind, cfg))
                .collect(),
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("form_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for kind in FormKind::ALL {
                    ui.selectable_value(&mut self.active, kind, self.tr.form_title(kind));
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            let tr = &self.tr;
            let active = self.active;
            if let Some(tab) = self.tabs.iter_mut().find(|t| t.kind == active) {
                form_ui(ui, tr, tab);
            }
        });
    }
}

fn form_ui(ui: &mut egui::Ui, tr: &Translator, tab: &mut FormTab) {
    let kind = tab.kind;
    let controller = kind.controller();
    ui.heading(tr.form_title(kind));
    ui.add_space(6.0);

    egui::Grid::new(("inputs", kind))
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for field in controller.input_fields() {
                ui.label(tr.field_label(kind, field));
                let choices = controller.unit_choices(field);
                let value = tab.fields.value_mut(*field);
                if choices.is_empty() {
                    ui.text_edit_singleline(value);
                } else {
                    egui::ComboBox::from_id_source((kind, *field))
                        .selected_text(value.clone())
                        .show_ui(ui, |ui| {
                            for choice in choices {
                                ui.selectable_value(value, choice.to_string(), choice);
                            }
                        });
                }
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
    ui.horizontal(|ui| {
        if ui.button(tr.t(keys::BUTTON_CALCULATE)).clicked() || enter {
            controller.submit(&tab.fields, &mut tab.panel);
        }
        if ui.button(tr.t(keys::BUTTON_CLEAN)).clicked() {
            controller.clear(&mut tab.fields, &mut tab.panel);
        }
    });
    ui.separator();

    egui::Grid::new(("outputs", kind))
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (field, text) in tab.panel.outputs().iter() {
                ui.label(tr.field_label(kind, field));
                ui.monospace(text);
                ui.end_row();
            }
        });

    if let Some(message) = tab.panel.error() {
        ui.add_space(6.0);
        ui.colored_label(egui::Color32::RED, message);
    }
}
