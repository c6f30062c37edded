use chrono::Datelike;
use clap::{Parser, Subcommand};

use comfort_toolbox::comfort::{self, ComfortRequest};
use comfort_toolbox::i18n::{keys, Translator};
use comfort_toolbox::{app, config, i18n};

/// 온열 쾌적도(PMV/APMV/PPD) 계산 툴박스.
#[derive(Debug, Parser)]
#[command(name = "comfort_toolbox")]
struct Cli {
    /// 표시 언어 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 환경/개인 파라미터로 PMV, APMV, PPD를 한 번에 계산한다.
    ///
    /// 생략한 파라미터에는 문서화된 기본값 정책(착의량=계절 테이블,
    /// 대사량=1.2met, 복사온도=공기온도, 기류=0.07~0.12m/s 무작위)을 적용한다.
    Compute {
        /// 공기 온도 [°C]
        #[arg(long)]
        ta: f64,
        /// 상대습도 [%]
        #[arg(long)]
        rh: f64,
        /// 착의량 [clo]
        #[arg(long)]
        clo: Option<f64>,
        /// 대사량 [met]
        #[arg(long)]
        met: Option<f64>,
        /// 외부 일 [met]
        #[arg(long)]
        wme: Option<f64>,
        /// 평균 복사 온도 [°C]
        #[arg(long)]
        tr: Option<f64>,
        /// 상대 기류 속도 [m/s]
        #[arg(long)]
        vel: Option<f64>,
        /// 수증기 분압 [Pa]
        #[arg(long)]
        pa: Option<f64>,
        /// 결과를 JSON 본문({"PMV": …, "APMV": …, "PPD": …})으로 출력
        #[arg(long)]
        json: bool,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = Translator::new(&lang);
    match cli.command {
        Some(Command::Compute {
            ta,
            rh,
            clo,
            met,
            wme,
            tr: radiant,
            vel,
            pa,
            json,
        }) => {
            let request = ComfortRequest {
                air_temp_c: ta,
                relative_humidity_pct: rh,
                clothing_clo: clo,
                metabolic_met: met.or(Some(cfg.comfort_defaults.metabolic_met)),
                external_work_met: wme.or(Some(cfg.comfort_defaults.external_work_met)),
                mean_radiant_temp_c: radiant,
                air_velocity_m_per_s: vel,
                vapor_pressure_pa: pa,
            };
            let month = chrono::Local::now().month();
            let mut rng = rand::thread_rng();
            let assessment = comfort::evaluate(&request, month, &mut rng)?;
            if json {
                println!("{}", serde_json::to_string(&assessment)?);
            } else {
                println!("{} {:+.2}", tr.t(keys::RESULT_PMV), assessment.pmv);
                println!("{} {:+.2}", tr.t(keys::RESULT_APMV), assessment.apmv);
                println!("{} {:.1} %", tr.t(keys::RESULT_PPD), assessment.ppd);
            }
            Ok(())
        }
        None => {
            app::run(&mut cfg, &tr)?;
            Ok(())
        }
    }
}
