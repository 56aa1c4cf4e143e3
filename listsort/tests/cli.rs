use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use walkdir::WalkDir;

fn listsort(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_listsort"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn listsort")
}

fn seed(base: &Path) {
    fs::write(
        base.join("ilanlar_tumu.csv"),
        "Baslik,Durum\nVilla,Satilik\nDaire,Kiralik\nArsa,Kapali\n",
    )
    .unwrap();
    fs::write(
        base.join("gorsel_eslestirme.csv"),
        "ilan_id,ilan_baslik,gorsel_sira,gorsel_dosya,orijinal_dosya\n\
         1,Villa,1,ilan1_1.jpg,IMG_01.JPG\n\
         1,Villa,2,ilan1_2.png,IMG_02.PNG\n\
         2,Daire,1,ilan2_1.jpg,DSC_7.jpg\n\
         3,Arsa,1,ilan3_1.jpg,arsa.jpg\n\
         42,Eski,1,ilan42_1.jpg,old.jpg\n",
    )
    .unwrap();
    let src = base.join("gorseller");
    fs::create_dir_all(&src).unwrap();
    for name in ["ilan1_1.jpg", "ilan1_2.png", "ilan2_1.jpg", "ilan42_1.jpg"] {
        fs::write(src.join(name), name).unwrap();
    }
}

fn images_under(base: &Path) -> Vec<String> {
    let mut found: Vec<String> = WalkDir::new(base)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|x| x != "csv"))
        .map(|e| {
            e.path()
                .strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    found.sort();
    found
}

#[test]
fn sort_moves_images_and_rewrites_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    seed(base);

    let out = listsort(&["sort", base.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    assert_eq!(
        images_under(base),
        [
            "Kapali/ilan42_1.jpg",
            "Kiralik/ilan2_1.jpg",
            "Satilik/ilan1_1.jpg",
            "Satilik/ilan1_2.png",
        ]
    );
    assert!(!base.join("gorseller").exists());

    let mapping = fs::read_to_string(base.join("gorsel_eslestirme.csv")).unwrap();
    let lines: Vec<&str> = mapping.lines().collect();
    assert_eq!(
        lines[0],
        "ilan_id,ilan_baslik,kategori,gorsel_sira,gorsel_dosya,orijinal_dosya"
    );
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[4], "3,Arsa,Kapali,1,ilan3_1.jpg,arsa.jpg");
    assert_eq!(lines[5], "42,Eski,Kapali,1,ilan42_1.jpg,old.jpg");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total listings: 3"));
    assert!(stdout.contains("4 of 5 images moved"));
    assert!(stdout.contains("Satilik: 2 images"));
}

#[test]
fn json_summary_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    seed(base);

    let out = listsort(&["sort", base.to_str().unwrap(), "--dry-run", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["dry_run"], true);
    assert_eq!(v["moved"], 4);
    assert_eq!(v["missing"], 1);
    assert_eq!(v["statuses"][1]["status"], "Kiralik");

    // nothing moved
    assert!(base.join("gorseller").join("ilan1_1.jpg").is_file());
    assert!(!base.join("Satilik").exists());
}

#[test]
fn count_reports_category_folders() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    fs::create_dir_all(base.join("Kiralik")).unwrap();
    fs::write(base.join("Kiralik").join("a.jpg"), "a").unwrap();
    fs::write(base.join("Kiralik").join("b.webp"), "b").unwrap();

    let out = listsort(&["count", base.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["Satilik: 0 images", "Kiralik: 1 images", "Kapali: 0 images"]
    );
}

#[test]
fn config_file_renames_layout() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    fs::write(base.join("listings.csv"), "Title,Status\nHouse,Satilik\n").unwrap();
    fs::write(
        base.join("gorsel_eslestirme.csv"),
        "ilan_id,ilan_baslik,gorsel_sira,gorsel_dosya,orijinal_dosya\n1,House,1,h.jpg,h.jpg\n",
    )
    .unwrap();
    fs::create_dir_all(base.join("incoming")).unwrap();
    fs::write(base.join("incoming").join("h.jpg"), "h").unwrap();
    let config = base.join("listsort.toml");
    fs::write(
        &config,
        "source_dir = \"incoming\"\nlistings_file = \"listings.csv\"\nstatus_column = \"Status\"\n",
    )
    .unwrap();

    let out = listsort(&[
        "sort",
        base.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(base.join("Satilik").join("h.jpg").is_file());
}

#[test]
fn bad_listing_id_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    seed(base);
    fs::write(
        base.join("gorsel_eslestirme.csv"),
        "ilan_id,ilan_baslik,gorsel_sira,gorsel_dosya,orijinal_dosya\nbir,Villa,1,ilan1_1.jpg,x\n",
    )
    .unwrap();

    let out = listsort(&["sort", base.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("bir"));
    let mapping = fs::read_to_string(base.join("gorsel_eslestirme.csv")).unwrap();
    assert!(mapping.starts_with("ilan_id,ilan_baslik,gorsel_sira,"));
    assert!(base.join("gorseller").join("ilan1_1.jpg").is_file());
}
