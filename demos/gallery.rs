//! Builds a small panel tree, lays it out, scrolls a row into view, and
//! dumps the emitted draw primitives.
//!
//! Run with: cargo run --example gallery

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use guidom::{
    draw_objects, ensure_visible, layout_objects, Align, GuiTree, LayoutKind, MonospaceFont,
    RecordingRenderer, Rgba,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("gallery.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let fonts_metrics = MonospaceFont::new(1, 1.0);
    let mut fonts = MonospaceFont::new(1, 1.0);
    let mut tree: GuiTree = GuiTree::new();

    // Window: fixed header above a scrollable list of rows.
    let window = tree.create_object();
    {
        let object = tree.object_mut(window).unwrap();
        object.w = 80;
        object.h = 24;
        object.border_width = 1;
        object.spacing = 1;
        object.flags.layout = LayoutKind::Vertical;
        object.flags.draw_background = true;
        object.flags.draw_border = true;
        object.color_background = Rgba::opaque(24, 24, 32);
        object.color_border = Rgba::WHITE;
    }

    let header = tree.create_child_object(window).unwrap();
    tree.set_label(header, "guidom gallery", 0, 0, &fonts_metrics)
        .unwrap();
    {
        let object = tree.object_mut(header).unwrap();
        object.h = 2;
        object.flags.fixed_h = true;
        object.flags.draw_label = true;
        object.flags.h_content_align = Align::Center;
        object.flags.v_content_align = Align::Center;
    }

    let list = tree.create_child_object(window).unwrap();
    {
        let object = tree.object_mut(list).unwrap();
        object.weight_y = 1;
        object.flags.layout = LayoutKind::None;
        object.flags.clip_children = true;
        object.flags.draw_background = true;
        object.color_background = Rgba::opaque(16, 16, 20);
    }

    let mut last_row = None;
    for i in 0..12_i16 {
        let row = tree.create_child_object(list).unwrap();
        tree.set_label(row, format!("row {i}"), 0, 0, &fonts_metrics)
            .unwrap();
        {
            let object = tree.object_mut(row).unwrap();
            object.y = i * 3;
            object.w = 70;
            object.h = 2;
            object.flags.draw_label = true;
            object.flags.draw_background = true;
            object.color_background = Rgba::opaque(40, 40, 56);
        }
        last_row = Some(row);
    }

    layout_objects(&mut tree, window, &fonts_metrics);

    // Bring the last row into the clipped list's view.
    if let Some(row) = last_row {
        ensure_visible(&mut tree, row);
        let list_object = tree.object(list).unwrap();
        log::info!(
            "list scrolled to content offset ({}, {})",
            list_object.content_dx,
            list_object.content_dy
        );
    }

    let mut renderer = RecordingRenderer::new();
    draw_objects(&tree, window, &mut renderer, &mut fonts);

    println!("emitted {} primitives:", renderer.commands.len());
    for command in &renderer.commands {
        println!("  {command:?}");
    }
    println!("emitted {} glyph runs:", fonts.runs.len());
    for run in &fonts.runs {
        println!("  ({:>3},{:>3}) {:?}", run.x, run.y, run.text);
    }
    Ok(())
}
