//! Static fixtures: the offer and reward catalogs, the login seed and the inbox seed.

use crate::models::{Message, MessageKind, Offer, OfferKind, Reward, RewardIcon};

/// Tags every new reviewer starts with.
pub const SEED_TAGS: [&str; 4] = ["#京都芸術大", "#コスパ重視", "#辛口レビュアー", "#iPhoneユーザー"];

/// Tag strip shown above the offer list.
pub const FEATURED_TAGS: [&str; 5] = ["#京都芸術大", "#コスパ重視", "#辛口", "#iPhone", "#夜型"];

pub static OFFERS: [Offer; 3] = [
    Offer {
        id: "1",
        kind: OfferKind::Design,
        title: "新発売エナドリのデザイン検証",
        company: "某大手飲料メーカー",
        reward_level: 2,
        tags: &["#美大生視点", "#徹夜作業", "#パッケージ"],
        description: "新商品のパッケージデザイン案について。マーケティング部内では好評ですが、現場（徹夜作業中）の学生が手に取りたくなるか、忖度なしで評価してください。",
        placeholder: "「研究室の机に置いたとき、ダサいと感じるか？」という視点で、色使いやフォントについて具体的に...",
        image_url: Some("https://placehold.co/600x400/111/crimson?text=New+Energy+Drink+Design"),
        external_url: None,
    },
    Offer {
        id: "2",
        kind: OfferKind::Ux,
        title: "格安プラン解約フローのストレス調査",
        company: "NextGen Mobile",
        reward_level: 1,
        tags: &["#iPhoneユーザー", "#UX改善", "#節約家"],
        description: "「解約しづらい」という声を受けています。実際に解約画面（ダミーサイト）まで進み、引き留め工作にどれだけ不快感を感じたか、率直な感情データを求めています。",
        placeholder: "「プリンターが紙詰まりした時」のようなイライラと比較してどうでしたか？どのボタンが一番誤解を招くか...",
        image_url: None,
        external_url: Some("https://example.com/dummy-cancellation"),
    },
    Offer {
        id: "3",
        kind: OfferKind::Physical,
        title: "800円の高級冷凍パスタの価値",
        company: "冷凍食品ベンチャー",
        reward_level: 3,
        tags: &["#一人暮らし", "#グルメ", "#コスパ"],
        description: "学食2回分（800円）の価値がある商品か検証したいです。サンプルを送付しますので、実際に喫食し、学生の厳しい財布の紐を緩めるだけの「説得力」が味にあるかジャッジしてください。",
        placeholder: "丸亀製麺の釜揚げうどん（並）と比較して、この価格を出す価値はありますか？食感は...",
        image_url: None,
        external_url: None,
    },
];

pub static REWARDS: [Reward; 4] = [
    Reward { id: "1", title: "Amazonギフト券 (¥500)", cost: 500, level: 1, icon: RewardIcon::Card },
    Reward { id: "2", title: "デジタル耳栓（作業用）", cost: 1500, level: 2, icon: RewardIcon::Gift },
    Reward { id: "3", title: "HHKB Professional HYBRID", cost: 5000, level: 2, icon: RewardIcon::Truck },
    Reward { id: "4", title: "経営者との1on1移動権", cost: 99999, level: 3, icon: RewardIcon::Car },
];

pub fn offers() -> &'static [Offer] {
    &OFFERS
}

pub fn rewards() -> &'static [Reward] {
    &REWARDS
}

/// Look up an offer by id.
pub fn find_offer(id: &str) -> Option<&'static Offer> {
    OFFERS.iter().find(|o| o.id == id)
}

/// The two messages injected into the inbox at login.
pub fn seed_messages() -> Vec<Message> {
    vec![
        Message {
            id: "1".to_string(),
            sender: "Devil's Voice 運営事務局".to_string(),
            title: "プロジェクト参加ありがとうございます".to_string(),
            body: "あなたの「本音」が企業のサービスを変えます。まずは案件一覧から、気になるオファーを探してレビューを投稿してください。".to_string(),
            date: "2024/05/20".to_string(),
            is_read: false,
            kind: MessageKind::System,
        },
        Message {
            id: "2".to_string(),
            sender: "株式会社NextGen".to_string(),
            title: "【限定招待】製品開発会議へのオンライン参加について".to_string(),
            body: "先日のUXレビューを拝見し、非常に鋭い視点に感銘を受けました。つきましては、次期プロダクトの仕様策定会議にオブザーバーとして参加いただけないでしょうか？謝礼もご用意しております。".to_string(),
            date: "2024/05/22".to_string(),
            is_read: false,
            kind: MessageKind::Invite,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_offer_per_kind() {
        let kinds: Vec<_> = offers().iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![OfferKind::Design, OfferKind::Ux, OfferKind::Physical]);
        assert!(offers().iter().all(|o| (1..=3).contains(&o.reward_level)));
    }

    #[test]
    fn media_matches_offer_kind() {
        let design = find_offer("1").unwrap();
        assert!(design.image_url.is_some());
        let ux = find_offer("2").unwrap();
        assert_eq!(ux.external_url, Some("https://example.com/dummy-cancellation"));
        let physical = find_offer("3").unwrap();
        assert!(physical.needs_sample());
        assert!(physical.image_url.is_none() && physical.external_url.is_none());
    }

    #[test]
    fn unknown_offer_id() {
        assert!(find_offer("99").is_none());
    }

    #[test]
    fn reward_costs_ascend() {
        let costs: Vec<u32> = rewards().iter().map(|r| r.cost).collect();
        assert_eq!(costs, vec![500, 1500, 5000, 99999]);
    }

    #[test]
    fn inbox_seed_is_two_unread_messages() {
        let messages = seed_messages();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| !m.is_read));
        assert_eq!(messages[0].kind, MessageKind::System);
        assert_eq!(messages[1].kind, MessageKind::Invite);
    }
}
