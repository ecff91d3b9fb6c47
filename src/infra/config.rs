use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

/// Domain stopwords excluded from keyword ranking regardless of frequency;
/// the shipped default targets café reviews and is overridable per project.
const DEFAULT_STOPWORDS: &[&str] = &[
    "광주", "카페", "맛집", "케이크", "커피", "메뉴", "주문", "방문", "디저트",
    "우리", "사장", "정말", "이용", "사진", "느낌", "가능", "포장", "생각",
    "하나", "가장", "자리", "시간", "모습", "사람", "마음", "준비", "오늘",
    "추천", "아메리카노", "라떼", "음료", "테이블", "직접", "주차장", "마시고",
    "예약", "블로그", "바로", "다음", "후기", "윤더지니",
];

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Stage 1 settings
    pub clean: CleanConfig,

    /// Stage 2 settings
    pub tokenize: TokenizeConfig,

    /// Stage 3 settings
    pub rank: RankConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig
{
    /// Text columns the sanitizer runs over (absent columns are skipped)
    pub text_columns: Vec<String>,

    /// Column scanned for review boundaries
    pub boundary_column: String,

    /// Substring marking the start of a new review
    pub boundary_marker: String,

    pub output_file: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizeConfig
{
    /// Analyzer backend name
    pub analyzer: String,

    /// Column fed to the analyzer
    pub source_column: String,

    /// Column the token lists are written to
    pub token_column: String,

    /// Tag the `words` backend assigns to every word
    pub word_tag: String,

    /// Part-of-speech tags eligible for extraction
    pub allowed_pos: Vec<String>,

    /// Tags exempt from the stem length threshold
    pub noun_tags: Vec<String>,

    /// Stems must be longer than this many chars (noun tags exempt)
    pub min_stem_chars: usize,

    pub output_file: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig
{
    /// Grouping key for aggregation
    pub subject_column: String,

    /// Column holding the stored token lists
    pub token_column: String,

    /// Keywords never ranked, however frequent
    pub stopwords: Vec<String>,

    /// Keywords must be longer than this many chars
    pub min_keyword_chars: usize,

    /// Ranks emitted per subject, at most
    pub top_n: usize,

    pub output_file: String,
}

impl Default for CleanConfig
{
    fn default() -> Self
    {
        Self {
            text_columns: vec![
                "blog_title".to_string(),
                "blog_description".to_string(),
                "content".to_string(),
            ],
            boundary_column: "link".to_string(),
            boundary_marker: "https://blog.naver.com".to_string(),
            output_file: "reviews_segmented.csv".to_string(),
        }
    }
}

impl Default for TokenizeConfig
{
    fn default() -> Self
    {
        Self {
            analyzer: "words".to_string(),
            source_column: "content".to_string(),
            token_column: "tokens".to_string(),
            word_tag: "NNG".to_string(),
            allowed_pos: vec![
                "NNG".to_string(),
                "NNP".to_string(),
                "VA".to_string(),
                "VV".to_string(),
            ],
            noun_tags: vec!["NNG".to_string(), "NNP".to_string()],
            min_stem_chars: 1,
            output_file: "reviews_tokenized.csv".to_string(),
        }
    }
}

impl Default for RankConfig
{
    fn default() -> Self
    {
        Self {
            subject_column: "name".to_string(),
            token_column: "tokens".to_string(),
            stopwords: DEFAULT_STOPWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_keyword_chars: 1,
            top_n: 30,
            output_file: "keyword_ranks.csv".to_string(),
        }
    }
}

pub fn load_config() -> Result<Config>
{
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["reviewmill.toml", ".reviewmill.toml"];

    for path in &config_paths
    {
        if Path::new(path).exists()
        {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with REVIEWMILL_ prefix
    builder = builder.add_source(config::Environment::with_prefix("REVIEWMILL").separator("_"));

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("reviewmill.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
