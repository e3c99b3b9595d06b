//! Test fixture for WALS Explorer integration tests
//!
//! Provides isolated CLDF directories built from inline CSV text.

use std::fs;
use std::path::{Path, PathBuf};
use wals_explorer::{DatasetEngine, EngineConfig};

pub const LANGUAGES_CSV: &str = "\
ID,Name,Latitude,Longitude,Macroarea,Family,Genus,Subfamily,ISO639P3code,Glottocode
abk,Abkhaz,43.0833333333,41.0,Eurasia,Northwest Caucasian,Northwest Caucasian,,abk,abkh1244
bsq,Basque,43.0,-3.0,Eurasia,Basque,Basque,,eus,basq1248
eng,English,52.0,0.0,Eurasia,Indo-European,Germanic,,eng,stan1293
ger,German,52.0,10.0,Eurasia,Indo-European,Germanic,,deu,stan1295
hin,Hindi,25.0,77.0,Eurasia,Indo-European,Indic,Indo-Aryan,hin,hind1269
swa,Swahili,-6.5,39.0,Africa,Niger-Congo,Bantoid,,swh,swah1253
yor,Yoruba,8.0,4.3333333333,Africa,Niger-Congo,Defoid,,yor,yoru1245
mao,Maori,-40.0,176.0,Papunesia,Austronesian,Oceanic,,mri,maor1246
xun,\"Ju|'hoan, Northern\",not-a-number,20.0,Africa,Kxa,Ju-Kung,,ktz,juho1239
unk,Unclassified Test Language,,,,,,,,
";

pub const PARAMETERS_CSV: &str = "\
ID,Name,Description,Chapter_ID
1A,Consonant Inventories,,1
81A,\"Order of Subject, Object and Verb\",,81
13A,Tone,,13
";

pub const CODES_CSV: &str = "\
ID,Parameter_ID,Name,Description,Number,icon
1A-1,1A,Small,6-14,1,cffffff
1A-2,1A,Moderately small,15-18,2,cd0d0d0
1A-3,1A,Average,19-25,3,c808080
81A-3,81A,VSO,,3,c0000dd
81A-1,81A,SOV,,1,cdd0000
81A-2,81A,SVO,,2,c0000dd
81A-7,81A,No dominant order,,7,cffffff
13A-1,13A,No tones,,1,cffffff
13A-2,13A,Simple tone system,,2,c0000dd
";

pub const VALUES_CSV: &str = "\
ID,Language_ID,Parameter_ID,Value,Code_ID,Comment,Source
81A-abk,abk,81A,1,81A-1,,
81A-bsq,bsq,81A,1,81A-1,,
81A-eng,eng,81A,2,81A-2,,
81A-ger,ger,81A,7,81A-7,,
81A-hin,hin,81A,1,81A-1,,
81A-swa,swa,81A,2,81A-2,,
81A-yor,yor,81A,2,81A-2,,
81A-mao,mao,81A,3,81A-3,,
81A-xun,xun,81A,2,81A-2,,
81A-zzz,zzz,81A,9,81A-9,,
1A-eng,eng,1A,3,1A-3,,
1A-hin,hin,1A,3,1A-3,,
13A-yor,yor,13A,2,13A-2,,
";

pub const CHAPTERS_CSV: &str = "\
ID,Name,Area_ID
1,Consonant Inventories,9
13,Tone,9
81,Order of Subject and Verb,10
";

/// Route the library's log output through the test harness. Set RUST_LOG
/// to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An isolated CLDF directory plus an engine over it
pub struct TestFixture {
    engine: DatasetEngine,
    cldf_path: PathBuf,
    _temp_dir: tempfile::TempDir,
}

impl TestFixture {
    /// Fixture with every table of the small WALS excerpt above
    pub fn with_wals_excerpt() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_files(&[
            ("languages.csv", LANGUAGES_CSV),
            ("parameters.csv", PARAMETERS_CSV),
            ("codes.csv", CODES_CSV),
            ("values.csv", VALUES_CSV),
            ("chapters.csv", CHAPTERS_CSV),
        ])
    }

    /// Fixture with only the given files present in the CLDF directory
    pub fn with_files(files: &[(&str, &str)]) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_files_and_config(files, EngineConfig::default())
    }

    pub fn with_files_and_config(
        files: &[(&str, &str)],
        config: EngineConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let raw: Vec<(&str, &[u8])> = files.iter().map(|(n, c)| (*n, c.as_bytes())).collect();
        Self::with_raw_files(&raw, config)
    }

    /// Fixture from file contents that need not be valid UTF-8
    pub fn with_raw_files(
        files: &[(&str, &[u8])],
        config: EngineConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        init_logging();
        let temp_dir = tempfile::tempdir()?;
        let cldf_path = temp_dir.path().join("cldf");
        fs::create_dir_all(&cldf_path)?;

        for (name, contents) in files {
            fs::write(cldf_path.join(name), contents)?;
        }

        let config = EngineConfig {
            cldf_path: cldf_path.clone(),
            ..config
        };
        let engine = DatasetEngine::with_config(config)?;

        Ok(TestFixture {
            engine,
            cldf_path,
            _temp_dir: temp_dir,
        })
    }

    /// Fixture pointing at a directory that does not exist
    pub fn without_dataset() -> Result<Self, Box<dyn std::error::Error>> {
        init_logging();
        let temp_dir = tempfile::tempdir()?;
        let cldf_path = temp_dir.path().join("missing-cldf");
        let engine = DatasetEngine::initialize(&cldf_path);

        Ok(TestFixture {
            engine,
            cldf_path,
            _temp_dir: temp_dir,
        })
    }

    pub fn engine(&self) -> &DatasetEngine {
        &self.engine
    }

    pub fn cldf_path(&self) -> &Path {
        &self.cldf_path
    }
}
