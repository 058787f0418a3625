// Static plate artwork. Each layer is a pre-authored asset in its own
// 120x120 local viewBox, independent of the dot coordinate space. The path
// data is fixed plate geometry and is never recomputed from input data.

pub const PLATE_BORDER: &str = r#"<svg viewBox='0 0 120 120' style='fill-rule:evenodd;clip-rule:evenodd;stroke-linejoin:round;stroke-miterlimit:2;'>
  <g id='Plate-Edge-Exterior-Stroke' transform='matrix(-1,-1.22465e-16,1.22465e-16,-1,120,120)'>
    <path d='M61.474,10.597C88.071,11.377 109.424,33.215 109.424,60C109.424,87.278 87.278,109.424 60,109.424C32.722,109.424 10.576,87.278 10.576,60C10.576,33.215 31.929,11.377 58.526,10.597L58.526,9.266C58.526,9.172 58.601,9.095 58.696,9.092C59.129,9.081 59.564,9.076 60,9.076C60.436,9.076 60.871,9.081 61.304,9.092C61.399,9.095 61.474,9.172 61.474,9.266L61.474,10.597ZM61.3,9.266L61.3,10.767C87.882,11.457 109.25,33.253 109.25,60C109.25,87.182 87.182,109.25 60,109.25C32.818,109.25 10.75,87.182 10.75,60C10.75,33.253 32.118,11.457 58.7,10.767L58.7,9.266C59.132,9.255 59.565,9.25 60,9.25C60.435,9.25 60.868,9.255 61.3,9.266Z' style='stroke:rgb(92,92,92); stroke-width:.25;'/>
  </g>
</svg>"#;

pub const PLATE_FILL: &str = r#"<svg id='backgroundFill' class='fillOn' viewBox='0 0 120 120' style='fill-rule:evenodd;clip-rule:evenodd;stroke-linejoin:round;stroke-miterlimit:2;'>
  <g id='Plate-Edge-with-Subtracted-Holes' transform='matrix(-1,-1.22465e-16,1.22465e-16,-1,120,120)'>
    <path id='backgroundFillPath' d='M61.3,9.266L61.3,10.767C87.882,11.457 109.25,33.253 109.25,60C109.25,87.182 87.182,109.25 60,109.25C32.818,109.25 10.75,87.182 10.75,60C10.75,33.253 32.118,11.457 58.7,10.767L58.7,9.266C59.132,9.255 59.565,9.25 60,9.25C60.435,9.25 60.868,9.255 61.3,9.266ZM71.802,104.047C71.376,104.161 70.937,103.908 70.823,103.481C70.708,103.055 70.962,102.616 71.388,102.501C71.815,102.387 72.254,102.641 72.368,103.067C72.482,103.494 72.229,103.933 71.802,104.047ZM48.198,104.047C47.771,103.933 47.518,103.494 47.632,103.067C47.746,102.641 48.185,102.387 48.612,102.501C49.038,102.616 49.292,103.055 49.177,103.481C49.063,103.908 48.624,104.161 48.198,104.047ZM40.728,101.328C40.328,101.142 40.155,100.665 40.341,100.265C40.528,99.865 41.004,99.692 41.405,99.878C41.805,100.065 41.978,100.541 41.791,100.941C41.605,101.341 41.128,101.515 40.728,101.328ZM27.755,92.245C27.443,91.932 27.443,91.425 27.755,91.113C28.068,90.801 28.575,90.801 28.887,91.113C29.199,91.425 29.199,91.932 28.887,92.245C28.575,92.557 28.068,92.557 27.755,92.245ZM92.245,92.245C91.932,92.557 91.425,92.557 91.113,92.245C90.801,91.932 90.801,91.425 91.113,91.113C91.425,90.801 91.932,90.801 92.245,91.113C92.557,91.425 92.557,91.932 92.245,92.245ZM99.145,82.6C99.035,82.792 98.79,82.857 98.599,82.747C98.407,82.636 98.342,82.392 98.452,82.2C98.562,82.009 98.807,81.944 98.999,82.054C99.19,82.164 99.255,82.409 99.145,82.6ZM20.855,82.6C20.745,82.409 20.81,82.164 21.001,82.054C21.193,81.944 21.438,82.009 21.548,82.2C21.658,82.392 21.593,82.636 21.401,82.747C21.21,82.857 20.965,82.792 20.855,82.6ZM104.047,71.802C103.933,72.229 103.494,72.482 103.067,72.368C102.641,72.254 102.387,71.815 102.501,71.388C102.616,70.962 103.055,70.708 103.481,70.823C103.908,70.937 104.161,71.376 104.047,71.802ZM15.953,71.802C15.839,71.376 16.092,70.937 16.519,70.823C16.945,70.708 17.384,70.962 17.499,71.388C17.613,71.815 17.359,72.254 16.933,72.368C16.506,72.482 16.067,72.229 15.953,71.802ZM60,59.8C60.11,59.8 60.2,59.89 60.2,60C60.2,60.11 60.11,60.2 60,60.2C59.89,60.2 59.8,60.11 59.8,60C59.8,59.89 59.89,59.8 60,59.8ZM104.047,48.198C104.161,48.624 103.908,49.063 103.481,49.177C103.055,49.292 102.616,49.038 102.501,48.612C102.387,48.185 102.641,47.746 103.067,47.632C103.494,47.518 103.933,47.771 104.047,48.198ZM15.953,48.198C16.067,47.771 16.506,47.518 16.933,47.632C17.359,47.746 17.613,48.185 17.499,48.612C17.384,49.038 16.945,49.292 16.519,49.177C16.092,49.063 15.839,48.624 15.953,48.198ZM27.755,27.755C28.068,27.443 28.575,27.443 28.887,27.755C29.199,28.068 29.199,28.575 28.887,28.887C28.575,29.199 28.068,29.199 27.755,28.887C27.443,28.575 27.443,28.068 27.755,27.755ZM92.245,27.755C92.557,28.068 92.557,28.575 92.245,28.887C91.932,29.199 91.425,29.199 91.113,28.887C90.801,28.575 90.801,28.068 91.113,27.755C91.425,27.443 91.932,27.443 92.245,27.755ZM79.272,18.672C79.672,18.858 79.845,19.335 79.659,19.735C79.472,20.135 78.996,20.308 78.595,20.122C78.195,19.935 78.022,19.459 78.209,19.059C78.395,18.659 78.872,18.485 79.272,18.672ZM48.198,15.953C48.624,15.839 49.063,16.092 49.177,16.519C49.292,16.945 49.038,17.384 48.612,17.499C48.185,17.613 47.746,17.359 47.632,16.933C47.518,16.506 47.771,16.067 48.198,15.953ZM71.802,15.953C72.229,16.067 72.482,16.506 72.368,16.933C72.254,17.359 71.815,17.613 71.388,17.499C70.962,17.384 70.708,16.945 70.823,16.519C70.937,16.092 71.376,15.839 71.802,15.953ZM60,14.799C60.221,14.799 60.4,14.979 60.4,15.199C60.4,15.42 60.221,15.599 60,15.599C59.779,15.599 59.6,15.42 59.6,15.199C59.6,14.979 59.779,14.799 60,14.799Z' style='fill:rgb(92,92,92);'/>
  </g>
</svg>"#;

pub const CENTER_HOLE: &str = r#"<svg viewBox='0 0 120 120' style='fill-rule:evenodd;clip-rule:evenodd;stroke-linejoin:round;stroke-miterlimit:2;'>
  <g id='_1-8-inch-center-hole' transform='matrix(0.0391862,0,0,0.0391862,57.5523,57.6538)'>
    <circle cx='62.463' cy='59.874' r='5.104' style='fill:rgb(76,0,255);'/>
    <text font-size='1.5px' x='52%' y='50%' fill='black' dominant-baseline='middle' text-anchor='middle'>Plate Center</text>
  </g>
</svg>"#;

// Three 1/4 inch holes at 120 degree spacing.
pub const QUARTER_INCH_HOLES: &str = r#"<svg viewBox='0 0 120 120' style='fill-rule:evenodd;clip-rule:evenodd;stroke-linejoin:round;stroke-miterlimit:2;'>
  <g id='_1-4-inch-holes'>
    <g transform='matrix(0.430075,0.744911,-0.744911,0.430075,83.4796,-11.1266)'>
      <circle cx='57.964' cy='12.901' r='0.465' style='fill:rgb(255,0,0);'/>
    </g>
    <g transform='matrix(0.430075,-0.744911,0.744911,0.430075,-13.3372,75.2294)'>
      <circle cx='57.964' cy='12.901' r='0.465' style='fill:rgb(255,0,0);'/>
    </g>
    <g transform='matrix(-0.860149,-1.05338e-16,1.05338e-16,-0.860149,109.858,115.897)'>
      <circle cx='57.964' cy='12.901' r='0.465' style='fill:rgb(255,0,0);'/>
    </g>
  </g>
</svg>"#;

// Two 1/2 inch holes at 180 degree spacing.
pub const HALF_INCH_180_DEGREE_HOLES: &str = r#"<svg viewBox='0 0 120 120' style='fill-rule:evenodd;clip-rule:evenodd;stroke-linejoin:round;stroke-miterlimit:2;'>
  <g id='_1-2-inch-holes--180-degree-spacing-'>
    <g transform='matrix(0.579984,0.270451,-0.270451,0.579984,48.2348,-5.80127)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(0,181,255);'/>
    </g>
    <g transform='matrix(-0.579984,-0.270451,0.270451,-0.579984,71.7652,125.801)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(0,181,255);'/>
    </g>
  </g>
</svg>"#;

// Twelve 1/2 inch holes at 30 degree spacing.
pub const HALF_INCH_30_DEGREE_HOLES: &str = r#"<svg viewBox='0 0 120 120' style='fill-rule:evenodd;clip-rule:evenodd;stroke-linejoin:round;stroke-miterlimit:2;'>
  <g id='_1-2-inch-holes--30-degree-spacing--'>
    <g transform='matrix(0.452507,-0.452507,0.452507,0.452507,-5.8569,48.5503)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(0.165629,-0.618136,0.618136,0.165629,-2.75859,83.0127)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(-0.165629,-0.618136,0.618136,-0.165629,17.1558,111.309)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(-0.452507,-0.452507,0.452507,-0.452507,48.5503,125.857)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(-0.618136,-0.165629,0.165629,-0.618136,83.0127,122.759)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(-0.618136,0.165629,-0.165629,-0.618136,111.309,102.844)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(-0.452507,0.452507,-0.452507,-0.452507,125.857,71.4497)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(-0.165629,0.618136,-0.618136,-0.165629,122.759,36.9873)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(0.165629,0.618136,-0.618136,0.165629,102.844,8.6911)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(0.452507,0.452507,-0.452507,0.452507,71.4497,-5.8569)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(0.618136,0.165629,-0.165629,0.618136,36.9873,-2.75859)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
    <g transform='matrix(0.618136,-0.165629,0.165629,0.618136,8.6911,17.1558)'>
      <circle cx='60.118' cy='15.413' r='1.25' style='fill:rgb(102,255,0);'/>
    </g>
  </g>
</svg>"#;

/// All static layers in their fixed paint order, below every dot.
pub const STATIC_LAYERS: [&str; 6] = [
    PLATE_BORDER,
    PLATE_FILL,
    CENTER_HOLE,
    QUARTER_INCH_HOLES,
    HALF_INCH_180_DEGREE_HOLES,
    HALF_INCH_30_DEGREE_HOLES,
];
