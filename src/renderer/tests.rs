// src/renderer/tests.rs

#[cfg(test)]
mod render_tests {
    use crate::color::Color;
    use crate::error::GlyphError;
    use crate::imaging::{HeadlessProvider, ImagingProvider, TextOrigin};
    use crate::naming::NamingScheme;
    use crate::renderer::*;
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};
    use test_log::test; // For logging within tests

    // --- MockProvider Definition ---
    #[derive(Debug, Clone, PartialEq)]
    enum MockImagingCall {
        LoadFont {
            path: PathBuf,
            size_px: f32,
        },
        NewCanvas {
            width: u32,
            height: u32,
            background: Color,
        },
        DrawText {
            origin: TextOrigin,
            text: String,
            color: Color,
        },
        Save {
            path: PathBuf,
            text: String,
        },
    }

    /// Canvas stand-in that remembers what was drawn on it.
    #[derive(Debug, Default)]
    struct MockCanvas {
        width: u32,
        height: u32,
        drawn: String,
    }

    #[derive(Default)]
    struct MockProvider {
        calls: RefCell<Vec<MockImagingCall>>,
        fail_font: bool,
        /// Allocate canvases of this size regardless of what was asked for.
        forced_size: Option<(u32, u32)>,
    }

    impl MockProvider {
        fn failing_font() -> Self {
            Self {
                fail_font: true,
                ..Self::default()
            }
        }

        fn forcing_size(width: u32, height: u32) -> Self {
            Self {
                forced_size: Some((width, height)),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<MockImagingCall> {
            self.calls.borrow().clone()
        }

        fn saved_paths(&self) -> Vec<PathBuf> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|c| match c {
                    MockImagingCall::Save { path, .. } => Some(path.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl ImagingProvider for MockProvider {
        type Font = ();
        type Canvas = MockCanvas;

        fn load_font(&self, path: &Path, size_px: f32) -> Result<(), GlyphError> {
            self.calls.borrow_mut().push(MockImagingCall::LoadFont {
                path: path.to_path_buf(),
                size_px,
            });
            if self.fail_font {
                return Err(GlyphError::font_load(path, "mock failure"));
            }
            Ok(())
        }

        fn new_canvas(&self, width: u32, height: u32, background: Color) -> MockCanvas {
            self.calls.borrow_mut().push(MockImagingCall::NewCanvas {
                width,
                height,
                background,
            });
            let (width, height) = self.forced_size.unwrap_or((width, height));
            MockCanvas {
                width,
                height,
                drawn: String::new(),
            }
        }

        fn draw_text(
            &self,
            canvas: &mut MockCanvas,
            origin: TextOrigin,
            text: &str,
            color: Color,
            _font: &(),
        ) -> Result<(), GlyphError> {
            canvas.drawn.push_str(text);
            self.calls.borrow_mut().push(MockImagingCall::DrawText {
                origin,
                text: text.to_string(),
                color,
            });
            Ok(())
        }

        fn save(&self, canvas: &MockCanvas, path: &Path) -> Result<(), GlyphError> {
            self.calls.borrow_mut().push(MockImagingCall::Save {
                path: path.to_path_buf(),
                text: canvas.drawn.clone(),
            });
            Ok(())
        }

        fn dimensions(&self, canvas: &MockCanvas) -> (u32, u32) {
            (canvas.width, canvas.height)
        }
    }

    fn dummy_font(dir: &Path) -> PathBuf {
        let path = dir.join("font.ttf");
        fs::write(&path, b"placeholder").unwrap();
        path
    }

    #[test]
    fn font_is_loaded_once_for_whole_run() {
        let provider = MockProvider::default();
        let renderer =
            GlyphRenderer::new(provider, Path::new("f.ttf"), RenderSettings::default()).unwrap();
        renderer
            .render_dataset(&['a', 'b', 'c'], Path::new("out"), NamingScheme::Sequential)
            .unwrap();

        let loads = renderer
            .provider()
            .calls()
            .into_iter()
            .filter(|c| matches!(c, MockImagingCall::LoadFont { .. }))
            .count();
        assert_eq!(loads, 1);
    }

    #[test]
    fn each_glyph_gets_fresh_canvas_and_default_draw_parameters() {
        let renderer = GlyphRenderer::new(
            MockProvider::default(),
            Path::new("f.ttf"),
            RenderSettings::default(),
        )
        .unwrap();
        renderer
            .render_dataset(&['字'], Path::new("out"), NamingScheme::Sequential)
            .unwrap();

        assert_eq!(
            renderer.provider().calls(),
            vec![
                MockImagingCall::LoadFont {
                    path: PathBuf::from("f.ttf"),
                    size_px: 64.0,
                },
                MockImagingCall::NewCanvas {
                    width: 64,
                    height: 64,
                    background: Color::White,
                },
                MockImagingCall::DrawText {
                    origin: TextOrigin::new(0, -12),
                    text: "字".to_string(),
                    color: Color::Black,
                },
                MockImagingCall::Save {
                    path: PathBuf::from("out/0.png"),
                    text: "字".to_string(),
                },
            ]
        );
    }

    #[test]
    fn custom_settings_flow_to_provider() {
        let settings = RenderSettings {
            canvas_width: 32,
            canvas_height: 48,
            font_size_px: 30.0,
            origin: TextOrigin::new(3, -4),
            background: Color::Black,
            foreground: Color::Rgb(200, 0, 0),
        };
        let renderer =
            GlyphRenderer::new(MockProvider::default(), Path::new("f.ttf"), settings).unwrap();
        let canvas = renderer.render_glyph('x').unwrap();
        assert_eq!(renderer.provider().dimensions(&canvas), (32, 48));
        assert_eq!(canvas.drawn, "x");

        let calls = renderer.provider().calls();
        assert!(calls.contains(&MockImagingCall::LoadFont {
            path: PathBuf::from("f.ttf"),
            size_px: 30.0
        }));
        assert!(calls.contains(&MockImagingCall::DrawText {
            origin: TextOrigin::new(3, -4),
            text: "x".to_string(),
            color: Color::Rgb(200, 0, 0),
        }));
    }

    #[test]
    fn sequential_naming_saves_by_position() {
        let renderer = GlyphRenderer::new(
            MockProvider::default(),
            Path::new("f.ttf"),
            RenderSettings::default(),
        )
        .unwrap();
        let count = renderer
            .render_dataset(&['a', 'a', 'b'], Path::new("out"), NamingScheme::Sequential)
            .unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            renderer.provider().saved_paths(),
            vec![
                PathBuf::from("out/0.png"),
                PathBuf::from("out/1.png"),
                PathBuf::from("out/2.png"),
            ]
        );
    }

    #[test]
    fn by_character_naming_saves_by_value() {
        let renderer = GlyphRenderer::new(
            MockProvider::default(),
            Path::new("f.ttf"),
            RenderSettings::default(),
        )
        .unwrap();
        renderer
            .render_dataset(&['日', '本'], Path::new("out"), NamingScheme::ByCharacter)
            .unwrap();
        assert_eq!(
            renderer.provider().saved_paths(),
            vec![PathBuf::from("out/日.png"), PathBuf::from("out/本.png")]
        );
    }

    #[test]
    fn font_failure_stops_before_any_canvas() {
        let provider = MockProvider::failing_font();
        let err = GlyphRenderer::new(provider, Path::new("f.ttf"), RenderSettings::default())
            .err()
            .unwrap();
        assert!(matches!(err, GlyphError::FontLoad { .. }), "{:?}", err);
    }

    #[test]
    fn zero_canvas_dimension_is_invalid_settings() {
        for (width, height) in [(0, 64), (64, 0)] {
            let settings = RenderSettings {
                canvas_width: width,
                canvas_height: height,
                ..RenderSettings::default()
            };
            let err = GlyphRenderer::new(MockProvider::default(), Path::new("f.ttf"), settings)
                .err()
                .unwrap();
            assert!(matches!(err, GlyphError::InvalidSettings(_)), "{:?}", err);
        }
    }

    #[test]
    fn non_positive_font_size_is_rejected() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let settings = RenderSettings {
                font_size_px: size,
                ..RenderSettings::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(GlyphError::InvalidSettings(_))
            ));
        }
        RenderSettings::default().validate().unwrap();
    }

    #[test]
    fn zero_width_run_writes_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let font = dummy_font(dir.path());
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let settings = RenderSettings {
            canvas_width: 0,
            ..RenderSettings::default()
        };
        let err = render_dataset(
            HeadlessProvider::new(),
            &['a', 'b'],
            &font,
            &out,
            NamingScheme::Sequential,
            settings,
        )
        .unwrap_err();
        assert!(matches!(err, GlyphError::InvalidSettings(_)), "{:?}", err);
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn canvas_of_wrong_size_is_rejected_before_drawing() {
        let renderer = GlyphRenderer::new(
            MockProvider::forcing_size(32, 32),
            Path::new("f.ttf"),
            RenderSettings::default(),
        )
        .unwrap();
        let err = renderer
            .render_dataset(&['a'], Path::new("out"), NamingScheme::Sequential)
            .unwrap_err();
        assert!(matches!(err, GlyphError::InvalidSettings(_)), "{:?}", err);

        let calls = renderer.provider().calls();
        assert!(!calls
            .iter()
            .any(|c| matches!(c, MockImagingCall::DrawText { .. } | MockImagingCall::Save { .. })));
    }

    #[test]
    fn unnameable_character_fails_fast_keeping_earlier_files() {
        let renderer = GlyphRenderer::new(
            MockProvider::default(),
            Path::new("f.ttf"),
            RenderSettings::default(),
        )
        .unwrap();
        let err = renderer
            .render_dataset(&['a', '/', 'b'], Path::new("out"), NamingScheme::ByCharacter)
            .unwrap_err();
        assert!(matches!(err, GlyphError::Encoding(_)), "{:?}", err);
        assert_eq!(
            renderer.provider().saved_paths(),
            vec![PathBuf::from("out/a.png")]
        );
    }

    #[test]
    fn empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let font = dummy_font(dir.path());
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let count = render_dataset(
            HeadlessProvider::new(),
            &[],
            &font,
            &out,
            NamingScheme::Sequential,
            RenderSettings::default(),
        )
        .unwrap();
        assert_eq!(count, 0);
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn missing_output_directory_is_io_error_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let font = dummy_font(dir.path());
        let out = dir.path().join("not-there");

        let err = render_dataset(
            HeadlessProvider::new(),
            &['a'],
            &font,
            &out,
            NamingScheme::Sequential,
            RenderSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GlyphError::Io { .. }), "{:?}", err);
        assert!(!out.exists());
    }

    #[test]
    fn settings_follow_config() {
        let config = crate::config::Config::from_json(
            r#"{ "canvas": { "width": 28, "height": 28, "origin": { "x": 1, "y": -2 } },
                 "font": { "size_px": 24.0 } }"#,
        )
        .unwrap();
        let settings = RenderSettings::from(&config);
        assert_eq!(settings.canvas_width, 28);
        assert_eq!(settings.canvas_height, 28);
        assert_eq!(settings.font_size_px, 24.0);
        assert_eq!(settings.origin, TextOrigin::new(1, -2));
        assert_eq!(settings.background, Color::White);
    }
}
