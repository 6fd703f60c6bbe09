use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

use niche_studio::actions::Actions;
use niche_studio::catalog::{self, FONT_STYLE_OPTIONS, IMAGE_STYLES, NICHES};
use niche_studio::cli::{Args, Command};
use niche_studio::config::Config;
use niche_studio::errors::StudioError;
use niche_studio::flows::FlowContext;
use niche_studio::log::{self, Artifacts};
use niche_studio::provider;
use niche_studio::studio::{download, Studio};
use niche_studio::ux;
use niche_studio::wire::{HookContentInput, ImageInput, SuggestPromptInput, ViralCaptionInput};

fn build_actions(cfg: &Config) -> anyhow::Result<Actions> {
    let provider = provider::make_provider(cfg)?;
    Ok(Actions::new(FlowContext {
        provider,
        artifacts: Artifacts::from_config(cfg),
        safety: cfg.safety_settings(),
    }))
}

fn niche(id: &str) -> Result<&'static catalog::Niche, StudioError> {
    catalog::niche_by_id(id).ok_or_else(|| StudioError::Validation(format!("Unknown niche '{id}'.")))
}

fn style(id: Option<&str>) -> Result<Option<String>, StudioError> {
    match id {
        None => Ok(None),
        Some(id) => catalog::style_by_id(id)
            .map(|s| Some(s.id.to_string()))
            .ok_or_else(|| StudioError::Validation(format!("Unknown image style '{id}'."))),
    }
}

fn font_description(id: Option<&str>) -> Result<Option<String>, StudioError> {
    match id {
        None => Ok(None),
        Some(id) => catalog::font_by_id(id)
            .map(|f| Some(f.ai_description.to_string()))
            .ok_or_else(|| StudioError::Validation(format!("Unknown font style '{id}'."))),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log::init_tracing(args.debug);

    let mut cfg = Config::load(args.config.as_deref().map(Path::new))?;
    cfg.apply_args(&args);
    tracing::debug!(provider = ?cfg.provider, text_model = %cfg.text_model, image_model = %cfg.image_model, "config loaded");

    match args.command {
        Command::Niches => print!("{}", ux::render_niches(&NICHES, None)),
        Command::Styles => print!("{}", ux::render_styles(&IMAGE_STYLES, catalog::style_by_id(&cfg.default_style))),
        Command::Fonts => print!("{}", ux::render_fonts(&FONT_STYLE_OPTIONS)),

        Command::Hook { idea, niche: niche_id } => {
            let niche_name = match niche_id.as_deref() {
                Some(id) => Some(niche(id)?.name.to_string()),
                None => None,
            };
            let actions = build_actions(&cfg)?;
            let pb = ux::spinner("Generating hook and content...");
            let out = actions
                .handle_generate_hook_content(&HookContentInput { post_idea: idea, niche: niche_name })
                .await;
            pb.finish_and_clear();
            let out = out?;
            println!("\n{}\n{}\n\n{}\n{}\n", "=== HOOK ===".bold(), out.hook, "=== CONTENT ===".bold(), out.content);
        }

        Command::Image { niche: niche_id, idea, style: style_id, hook, content, hook_font, content_font, download: save } => {
            let n = niche(&niche_id)?;
            let input = ImageInput {
                niche: n.name.to_string(),
                post_idea: idea.clone(),
                image_style: style(style_id.as_deref())?,
                hook_text: hook,
                content_text: content,
                hook_font_description: font_description(hook_font.as_deref())?,
                content_font_description: font_description(content_font.as_deref())?,
            };
            let actions = build_actions(&cfg)?;
            let pb = ux::spinner("Generating your masterpiece...");
            let out = actions.handle_generate_image(&input).await;
            pb.finish_and_clear();
            let out = out?;
            if save {
                let stem = download::download_stem(&idea, Some(n));
                let path = download::save_image(&out.image_url, &PathBuf::from(&cfg.out_dir), &stem)?;
                println!("{} {}", "Image saved:".green().bold(), path.display());
            } else {
                println!("{}", out.image_url);
            }
        }

        Command::Caption { niche: niche_id, idea, hook, content, style: style_id } => {
            let n = niche(&niche_id)?;
            let input = ViralCaptionInput {
                post_idea: idea,
                niche: n.name.to_string(),
                hook_text: hook,
                content_text: content,
                image_style: style(style_id.as_deref())?,
            };
            let actions = build_actions(&cfg)?;
            let pb = ux::spinner("AI is crafting your viral caption...");
            let out = actions.handle_generate_viral_caption(&input).await;
            pb.finish_and_clear();
            let out = out?;
            println!("\n{}\n{}\n\n{}\n{}\n", "=== CAPTION ===".bold(), out.viral_caption, "=== HASHTAGS ===".bold(), out.viral_hashtags);
        }

        Command::Suggest { niche: niche_id } => {
            let n = niche(&niche_id)?;
            let actions = build_actions(&cfg)?;
            let pb = ux::spinner("Getting suggestions...");
            let out = actions.handle_suggest_prompt(&SuggestPromptInput { niche: n.name.to_string() }).await;
            pb.finish_and_clear();
            println!("{}", out?.prompt_suggestion);
        }

        Command::Studio => {
            let actions = build_actions(&cfg)?;
            let mut studio = Studio::new(actions, &cfg);
            run_studio(&mut studio, Path::new(&cfg.out_dir)).await;
        }
    }

    Ok(())
}

const STUDIO_HELP: &str = "\
commands:
  n <id|#>        select niche (clears the post)
  i <text>        post idea
  h <text>        hook text
  c <text>        content text
  s <id|none>     image style
  hf <id> | cf <id>   hook / content font
  hs <px> | cs <px>   hook / content font size
  gh | gi | gc    generate hook+content / image / caption
  d               download image
  p               show post, preview and caption
  niches | styles | fonts
  q               quit";

async fn run_studio(studio: &mut Studio, out_dir: &Path) {
    print!("{}", ux::render_niches(&NICHES, None));
    println!("\n{STUDIO_HELP}\n");

    loop {
        let Some(line) = ux::ask(">") else { break };
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').map(|(c, r)| (c, r.trim())).unwrap_or((line, ""));

        let res: Result<(), StudioError> = match cmd {
            "" => Ok(()),
            "q" | "quit" | "exit" => break,
            "?" | "help" => {
                println!("{STUDIO_HELP}");
                Ok(())
            }
            "n" => {
                let by_index = rest.parse::<usize>().ok().and_then(|i| i.checked_sub(1)).and_then(|i| NICHES.get(i));
                let picked = match by_index {
                    Some(n) => studio.select_niche(n),
                    None => studio.select_niche_by_id(rest),
                };
                picked.map(|_| print!("{}", ux::render_niches(&NICHES, studio.draft.niche)))
            }
            "i" => {
                studio.set_post_idea(rest);
                Ok(())
            }
            "h" => {
                studio.set_hook_text(rest);
                Ok(())
            }
            "c" => {
                studio.set_content_text(rest);
                Ok(())
            }
            "s" if rest.eq_ignore_ascii_case("none") => {
                studio.clear_style();
                Ok(())
            }
            "s" => studio.select_style_by_id(rest),
            "hf" => studio.set_hook_font(rest),
            "cf" => studio.set_content_font(rest),
            "hs" | "cs" => match rest.parse::<u32>() {
                Ok(px) if cmd == "hs" => studio.set_hook_font_size(px),
                Ok(px) => studio.set_content_font_size(px),
                Err(_) => Err(StudioError::Validation(format!("'{rest}' is not a size in px."))),
            },
            "gh" => {
                let pb = ux::spinner("Generating hook and content...");
                studio.generate_hook_content().await;
                pb.finish_and_clear();
                print!("{}", ux::render_form(studio));
                Ok(())
            }
            "gi" => {
                let pb = ux::spinner("Generating your masterpiece...");
                studio.generate_image().await;
                pb.finish_and_clear();
                print!("{}{}", ux::render_preview(&studio.preview()), ux::render_caption_pane(studio));
                Ok(())
            }
            "gc" if !studio.caption_pane_visible() => {
                Err(StudioError::Validation("Generate an image before crafting a caption.".into()))
            }
            "gc" => {
                let pb = ux::spinner("AI is crafting your viral caption...");
                studio.generate_caption().await;
                pb.finish_and_clear();
                print!("{}", ux::render_caption_pane(studio));
                Ok(())
            }
            "d" => studio.download(out_dir).map(|_| ()),
            "p" => {
                print!(
                    "{}{}{}",
                    ux::render_form(studio),
                    ux::render_preview(&studio.preview()),
                    ux::render_caption_pane(studio)
                );
                Ok(())
            }
            "niches" => {
                print!("{}", ux::render_niches(&NICHES, studio.draft.niche));
                Ok(())
            }
            "styles" => {
                print!("{}", ux::render_styles(&IMAGE_STYLES, studio.draft.style));
                Ok(())
            }
            "fonts" => {
                print!("{}", ux::render_fonts(&FONT_STYLE_OPTIONS));
                Ok(())
            }
            other => Err(StudioError::Validation(format!("Unknown command '{other}'. Type 'help'."))),
        };

        if let Err(e) = res {
            eprintln!("{} {}", "[error]".red().bold(), e.user_message());
        }
        ux::print_notices(&studio.take_notices());
    }
}
