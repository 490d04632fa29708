//! Perimeter post placement.
//!
//! Posts walk the deck perimeter east, then south, then west. The eastern and
//! southern runs only need the foundation-derived bounds; where the last
//! southern post lands fixes the deck's southern edge and the step corner,
//! which in turn places the western run.

use crate::bounds::{DeckBounds, PostBackfill};
use crate::elements::{Element, ElementTrait, SUPPORT_WIDTH, Support, SupportKind};
use crate::error::LayoutResult;
use crate::foundation::Foundation;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight run of posts, as the rectangle their footprints cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostRun {
    /// Shared center line: x for north-south runs, y for east-west runs.
    pub center: f64,
    pub extent: Rect,
}

impl PostRun {
    fn from_posts(center: f64, posts: &[Support]) -> Self {
        let extent = posts
            .iter()
            .map(Support::footprint)
            .reduce(|acc, rect| acc.union(rect))
            .unwrap_or(Rect::ZERO);
        Self { center, extent }
    }

    pub fn west_edge(&self) -> f64 {
        self.extent.x0
    }

    pub fn east_edge(&self) -> f64 {
        self.extent.x1
    }

    pub fn north_edge(&self) -> f64 {
        self.extent.y0
    }

    pub fn south_edge(&self) -> f64 {
        self.extent.y1
    }
}

/// All perimeter posts.
#[derive(Debug, Clone)]
pub struct Posts {
    posts: Vec<Support>,
    western: PostRun,
    eastern: PostRun,
    southern: PostRun,
    backfill: PostBackfill,
}

impl Posts {
    /// Place every post and resolve the deck bounds from where they land.
    pub fn place(foundation: &Foundation, deck: &DeckBounds) -> LayoutResult<(Posts, DeckBounds)> {
        let half = SUPPORT_WIDTH / 2.0;
        let on_center = SUPPORT_WIDTH + deck.post_spacing();
        let post_to_edge = deck.post_to_edge();
        let post_to_house = deck.post_to_house();
        let provisional = deck.provisional_bounds();

        let mut posts = Vec::new();
        let post = |name: String, center: Point, outward: Vec2| {
            Support::new(SupportKind::Post, name, center).with_footing(outward)
        };

        let x_eastern = provisional.x_east - post_to_edge - half;
        let mut y = foundation.main_west().y + post_to_house + half;
        for idx in 1..=4 {
            posts.push(post(format!("Eastern Post {idx}"), Point::new(x_eastern, y), Vec2::new(1.0, 0.0)));
            y += on_center;
        }

        let y_southern = y;
        posts.push(post(
            "Southeast Corner Post".to_string(),
            Point::new(x_eastern, y_southern),
            Vec2::new(1.0, 1.0),
        ));

        let mut x = x_eastern;
        for idx in 1..=3 {
            x -= on_center;
            posts.push(post(format!("Southern Post {idx}"), Point::new(x, y_southern), Vec2::new(0.0, 1.0)));
        }

        let backfill = PostBackfill {
            y_south: y_southern + half + post_to_edge,
            x_step_east: x - half - post_to_edge,
        };
        let resolved = deck.resolve(backfill)?;
        let bounds = resolved.bounds()?;

        let x_western = bounds.x_west + post_to_edge + half;
        let first_y = foundation.front_corner().y + post_to_house + half;
        let third_y = bounds.y_step - post_to_edge - half;
        let second_y = (first_y + third_y) / 2.0;
        for (idx, y) in [first_y, second_y, third_y].into_iter().enumerate() {
            posts.push(post(
                format!("Western Post {}", idx + 1),
                Point::new(x_western, y),
                Vec2::new(-1.0, 0.0),
            ));
        }
        posts.push(post(
            "Step Post".to_string(),
            Point::new(x_western, y_southern),
            Vec2::new(-1.0, 1.0),
        ));

        let eastern = PostRun::from_posts(x_eastern, &posts[0..5]);
        let southern = PostRun::from_posts(y_southern, &posts[4..8]);
        let western = PostRun::from_posts(x_western, &posts[8..11]);

        log::debug!(
            "Placed {} posts; southern edge {:.3}, step east {:.3}",
            posts.len(),
            backfill.y_south,
            backfill.x_step_east
        );

        let placed = Posts {
            posts,
            western,
            eastern,
            southern,
            backfill,
        };
        Ok((placed, resolved))
    }

    /// Western run, posts 1 to 3 (the step post stands apart).
    pub fn western_posts(&self) -> PostRun {
        self.western
    }

    /// Eastern run including the south-east corner post.
    pub fn eastern_posts(&self) -> PostRun {
        self.eastern
    }

    /// Southern run including the south-east corner post.
    pub fn southern_posts(&self) -> PostRun {
        self.southern
    }

    pub fn backfill(&self) -> PostBackfill {
        self.backfill
    }

    pub fn posts(&self) -> &[Support] {
        &self.posts
    }

    /// Look up a post by name.
    pub fn find(&self, name: &str) -> Option<&Support> {
        self.posts.iter().find(|post| post.name() == name)
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.posts.into_iter().map(Element::Support).collect()
    }
}
