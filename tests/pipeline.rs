use image::{GenericImageView, GrayImage, Luma, Rgb};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wallpaper::{wallpaper, Error, Generator, Options, Palette};

fn opts(generator: Generator, width: u32, height: u32, args: &[&str]) -> Options {
    Options {
        width,
        height,
        generator,
        args: args.iter().map(|s| s.to_string()).collect(),
        discrete: false,
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(1)
}

#[test]
fn black_to_white_gradient() {
    let palette: Palette = "#000000\n#FFFFFF\n".parse().unwrap();
    let img = wallpaper(&opts(Generator::Gradient, 4, 1, &[]), &palette, &mut rng()).unwrap();
    let shades: Vec<u8> = img.pixels().map(|(_, _, p)| p[0]).collect();
    // the anchors may come out in either order
    if shades[0] == 0 {
        assert_eq!(shades, vec![0, 64, 128, 191]);
    } else {
        assert_eq!(shades, vec![255, 191, 128, 64]);
    }
    for (_, _, p) in img.pixels() {
        assert!(p[0] == p[1] && p[1] == p[2]);
    }
}

#[test]
fn one_color_is_not_enough() {
    let palette: Palette = "#123456\n".parse().unwrap();
    // a graphic with a missing file would fail too, the palette has to win
    let o = opts(Generator::Graphic, 4, 4, &["/nonexistent/picture.png"]);
    assert!(matches!(
        wallpaper(&o, &palette, &mut rng()),
        Err(Error::InsufficientColors(1))
    ));
}

#[test]
fn bad_palette_line() {
    match "#000000\n#12345\n".parse::<Palette>() {
        Err(Error::PaletteParse(line)) => assert_eq!(line, "#12345"),
        r => panic!("unexpected {:?}", r),
    }
}

#[test]
fn discrete_mandelbrot_uses_palette_colors() {
    let palette: Palette = "#ff0000\n#00ff00\n#0000ff\n#202020\n".parse().unwrap();
    let mut o = opts(Generator::Mandelbrot, 60, 40, &["-i", "25"]);
    o.discrete = true;
    let img = wallpaper(&o, &palette, &mut rng()).unwrap();
    for (_, _, p) in img.pixels() {
        assert!(palette.colors().contains(&p), "{:?}", p);
    }
}

#[test]
fn mandelbrot_center_gets_second_anchor() {
    let palette: Palette = "#000000\n#ffffff\n".parse().unwrap();
    let mut r = rng();
    let (_, to) = palette.choose_two(&mut r.clone()).unwrap();
    let img = wallpaper(&opts(Generator::Mandelbrot, 50, 50, &[]), &palette, &mut r).unwrap();
    assert_eq!(img.get_pixel(25, 25), to);
}

#[test]
fn unknown_generator_and_bad_args() {
    assert!(matches!(
        "julia".parse::<Generator>(),
        Err(Error::UnknownGenerator(_))
    ));
    let palette: Palette = "#000000\n#ffffff\n".parse().unwrap();
    let err = wallpaper(&opts(Generator::Mandelbrot, 8, 8, &["-i", "x"]), &palette, &mut rng())
        .err()
        .unwrap();
    assert!(matches!(err, Error::GeneratorArguments { .. }));
    assert!(err.is_usage());
}

#[test]
fn zero_sized_canvas() {
    let palette: Palette = "#000000\n#ffffff\n".parse().unwrap();
    assert!(matches!(
        wallpaper(&opts(Generator::Gradient, 0, 5, &[]), &palette, &mut rng()),
        Err(Error::InvalidCanvas { .. })
    ));
}

#[test]
fn graphic_from_file_to_png() {
    let dir = std::env::temp_dir();
    let id = std::process::id();
    let src = dir.join(format!("wallpaper-it-src-{}.png", id));
    let out = dir.join(format!("wallpaper-it-out-{}.png", id));
    GrayImage::from_fn(2, 1, |x, _| Luma([if x == 0 { 0 } else { 255 }]))
        .save(&src)
        .unwrap();

    let palette: Palette = "#000000\n#ffffff\n".parse().unwrap();
    let o = opts(Generator::Graphic, 8, 2, &[src.to_str().unwrap()]);
    let img = wallpaper(&o, &palette, &mut rng()).unwrap();
    img.save(&out).unwrap();
    let written = image::open(&out).unwrap().to_rgb8();
    std::fs::remove_file(&src).unwrap();
    std::fs::remove_file(&out).unwrap();

    assert_eq!(written.dimensions(), (8, 2));
    let left = *written.get_pixel(0, 1);
    let right = *written.get_pixel(7, 1);
    assert_ne!(left, right);
    for c in [left, right] {
        assert!(c == Rgb([0, 0, 0]) || c == Rgb([255, 255, 255]));
    }
}

fn assert_send_sync<T: Send + Sync>(_: &T) {}

#[test]
fn wallpaper_can_be_shared_between_threads() {
    let palette: Palette = "#000000\n#ffffff\n".parse().unwrap();
    let mut o = opts(Generator::Mandelbrot, 16, 16, &[]);
    o.discrete = true;
    let img = wallpaper(&o, &palette, &mut rng()).unwrap();
    assert_send_sync(&img);
    let expected = img.get_pixel(8, 8);
    let from_thread = std::thread::scope(|s| s.spawn(|| img.get_pixel(8, 8)).join().unwrap());
    assert_eq!(from_thread, expected);
}
